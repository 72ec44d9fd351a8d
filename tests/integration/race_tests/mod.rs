mod config;
mod plugin;
mod road;
mod session;

mod common;
mod service;
mod window;

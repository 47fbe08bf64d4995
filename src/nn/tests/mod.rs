mod activation;
mod config;
mod fc;

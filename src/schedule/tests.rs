mod insert;
mod utils;

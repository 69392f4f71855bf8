pub mod commands;
mod print;
mod prompt;
mod setup;

pub mod address;
pub mod client;
pub mod command;
pub mod command_list;
pub mod delimiters;
pub mod errors;
pub mod parser;
pub mod response;
pub mod tag;
pub mod transport;
pub mod version;

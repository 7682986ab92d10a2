pub mod driver;
pub mod etl;
pub mod mapper;
pub mod pipeline;
pub mod reader;
pub mod writer;

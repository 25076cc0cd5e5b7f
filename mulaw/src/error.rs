use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Payload of `{0}` bytes does not fit the 32-bit RIFF size fields")]
    PayloadTooLarge(u64),

    #[error("IO error")]
    IO(#[from] io::Error),
}

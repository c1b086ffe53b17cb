//! Prints the pulse train a payload produces, without driving any
//! hardware.
//!
//! ```sh
//! cargo run --example encode -- --payload 100 --duration 50
//! ```

use clap::Parser;
use ooktx::{
    bits::BitString,
    frame::{
        self,
        SYNC_PATTERN,
    },
    hamming,
};

#[derive(Debug, Parser)]
struct Args {
    /// Byte to encode.
    #[clap(long, default_value = "100")]
    payload: u8,

    /// Payload bit duration in milliseconds.
    #[clap(long, default_value = "50")]
    duration: u64,
}

fn main() {
    let args = Args::parse();

    let payload = BitString::from_byte(args.payload);
    let sync = hamming::encode(&frame::sync_pattern());
    let coded = hamming::encode(&payload);

    println!("payload:   {} = {payload}", args.payload);
    println!("code word: {coded}");
    println!("sync:      {SYNC_PATTERN} -> {sync}");
    println!();
    println!("frame on the line ({}ms per payload bit):", args.duration);
    println!("  {sync}  @ {}ms/bit", args.duration * 2);
    println!("  {coded}  @ {}ms/bit", args.duration);
    println!("  {sync}  @ {}ms/bit", args.duration * 2);
}

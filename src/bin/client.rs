//! Demo client: sends one query over plain TCP and prints the verdict with
//! the round-trip time. Not on the serving path.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::time::Instant;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(query) = args.next() else {
        bail!("usage: lineseek-client <query> [host:port]");
    };
    let addr = args.next().unwrap_or_else(|| "127.0.0.1:46789".to_string());

    let start = Instant::now();
    let mut stream =
        TcpStream::connect(&addr).with_context(|| format!("Failed to connect to {addr}"))?;
    stream.write_all(query.as_bytes())?;

    let mut response = String::new();
    BufReader::new(&stream).read_line(&mut response)?;
    let elapsed = start.elapsed();

    println!(
        "Query: {} | Response: {} | Execution time: {:.6}s",
        query,
        response.trim_end(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

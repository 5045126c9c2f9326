use std::io::Write;

use clap::Parser;

use scrawlc::{generate_fonts, Args, Error};

fn main() -> Result<(), Error> {
    env_logger::builder()
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            writeln!(
                buf,
                "{}: {:?}: {}: {}",
                ts,
                std::thread::current().id(),
                record.level(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    let paths = generate_fonts(&args)?;
    for path in &paths {
        println!("Generated: {}", path.display());
    }
    Ok(())
}

use std::env;

use qforge_generate::{GenerateOptions, ValueGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut selector: Option<String> = None;
    let mut options = GenerateOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => options.seed = args.next().map(|s| s.parse()).transpose()?,
            "--len" => {
                options.vector_len = args.next().ok_or("missing --len value")?.parse()?;
            }
            _ => {
                if selector.is_none() {
                    selector = Some(arg);
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let selector = selector.ok_or("missing selector")?;
    let mut generator = ValueGenerator::new(options)?;
    let value = generator.generate(&selector)?;
    println!("{value:#?}");
    Ok(())
}

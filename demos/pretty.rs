//! The two rendering modes side by side.
//!
//! Run with: cargo run --example pretty

use propfile::{from_str, RenderOptions};
use std::error::Error;

const CONFIG: &str = "\
#   A messy, hand-edited file


<logdefaults>
log.level = info
</logdefaults>

server
{
   port=1234
%logdefaults%
}
";

fn main() -> Result<(), Box<dyn Error>> {
    let props = from_str(CONFIG)?;

    println!("Format-preserving:");
    println!("------------------");
    println!("{}", props.render(&RenderOptions::new()));

    println!("Pretty-printed:");
    println!("---------------");
    println!("{}", props.render(&RenderOptions::pretty()));

    Ok(())
}

//! Programmatic editing with format preservation.
//!
//! Run with: cargo run --example edit

use propfile::from_str;
use std::error::Error;

const CONFIG: &str = "\
# Production settings -- edit with care!

server
{
port = 1234
log.level = debug
}

removeme = obsolete
bind = 0.0.0.0
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut props = from_str(CONFIG)?;

    println!("Keys: {}", props.keys().collect::<Vec<_>>().join(", "));
    println!("Port: {}", props.get("server.port"));
    println!("Fallback: {}", props.get_or("not.there", "default!"));

    // Edits touch only the lines they concern.
    props.put("bind", "127.0.0.1");
    props.remove("removeme");

    // Appended content lands after the original lines.
    props.put_empty_line();
    props.put_comment("added by the deploy script");
    props.put("deploy.note", "multi \nline \nvalue");

    println!("\nEdited output:\n{props}");
    Ok(())
}

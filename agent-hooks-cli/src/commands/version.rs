use agent_hooks_core::Result;

pub fn run() -> Result<()> {
    println!("{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

use crate::auth;

pub fn handle() -> anyhow::Result<()> {
    println!("{}", auth::generate_secret());
    Ok(())
}

use anyhow::Result;
use ingresso::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Upgrade { .. } => actions::upgrade::handle(action).await?,
    }

    Ok(())
}

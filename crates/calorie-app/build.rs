//! Embeds git metadata (commit hash, dirty flag) for the main menu footer.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let git = GitclBuilder::all_git()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

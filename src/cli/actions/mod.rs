pub mod list;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    List(list::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub fn execute(self) -> anyhow::Result<()> {
        run::execute(self)
    }
}

//! Task management commands for CLI.

use clap::Subcommand;

use super::open_app;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the end of the list
    Add {
        /// Task title
        title: String,
        /// Estimated pomodoros (default: 1)
        #[arg(long)]
        est: Option<u32>,
    },
    /// List tasks
    List {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Flip a task between open and done
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        TaskAction::Add { title, est } => {
            let task = app.add_task(&title, est)?;
            println!("Task created: {}", task.id);
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.tasks())?);
                return Ok(());
            }
            if app.tasks().is_empty() {
                println!("No tasks.");
                return Ok(());
            }
            let active = app.tasks().find_active().map(|t| t.id.clone());
            for task in app.tasks().tasks() {
                let mark = if task.done { "x" } else { " " };
                let arrow = if active.as_deref() == Some(task.id.as_str()) { ">" } else { " " };
                println!(
                    "{arrow}[{mark}] {}  {}/{}  {}",
                    task.title, task.pomos, task.est_pomos, task.id
                );
            }
        }
        TaskAction::Toggle { id } => {
            let task = app.toggle_task(&id)?;
            println!("{}: {}", task.title, if task.done { "done" } else { "open" });
        }
        TaskAction::Delete { id } => {
            app.delete_task(&id)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}

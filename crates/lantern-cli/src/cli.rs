//! Command definitions and handlers using clap's derive API.
//!
//! Each subcommand gets a clap argument struct here that converts into the
//! framework-free parameter types from `lantern_core::params` via `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Task Store
//! ```
//!
//! CLI concerns (flags, aliases, help text, date and link parsing) stay in
//! this layer; the core parameter types never see clap.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use jiff::{civil::Date, Zoned};
use lantern_core::{
    display::{
        Categories, ClearResult, CreateResult, DeleteResult, GroupedTasks, Notice, Reminders,
        StatsReport, TaskList, UpdateResult,
    },
    params::{CreateReminder, CreateTask, TaskQuery, UpdateTask},
    Link, Priority, TaskStore,
};

use crate::renderer::TerminalRenderer;

/// Dispatches parsed commands against the task store and renders the
/// resulting markdown.
pub struct Cli {
    store: TaskStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: TaskStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    /// Default view: the open list bucketed by due date.
    pub fn list_grouped(self) -> Result<()> {
        let grouped = GroupedTasks(self.store.grouped_tasks());
        self.renderer.render(&grouped.to_string())
    }

    /// Aggregate statistics over the task collection.
    pub fn show_stats(self) -> Result<()> {
        let tasks = self.store.tasks();
        let today = Zoned::now().date();
        let report = StatsReport {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
            completion_rate: self.store.completion_rate(),
            due_today: self.store.task_count_for_date_where(today, |t| !t.completed),
        };
        self.renderer.render(&report.to_string())
    }

    pub async fn handle_task_command(mut self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self.store.create_task(&args.into()).await?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List(args) => {
                let tasks = self.store.filter_tasks(&args.into());
                self.renderer.render(&TaskList(tasks).to_string())
            }
            TaskCommands::Show(args) => match self.store.get_task(args.id) {
                Some(task) => self.renderer.render(&task.to_string()),
                None => self
                    .renderer
                    .render(&Notice::not_found("task", args.id).to_string()),
            },
            TaskCommands::Update(args) => {
                let id = args.id;
                let update: UpdateTask = args.into();
                if update.is_empty() {
                    return self
                        .renderer
                        .render(&Notice::skipped("No fields provided; nothing changed.").to_string());
                }
                match self.store.update_task(id, &update).await {
                    Some(task) => self.renderer.render(&UpdateResult::new(task).to_string()),
                    None => self
                        .renderer
                        .render(&Notice::not_found("task", id).to_string()),
                }
            }
            TaskCommands::Toggle(args) => match self.store.toggle_task(args.id).await {
                Some(task) => {
                    let state = if task.completed { "done" } else { "open" };
                    self.renderer.render(
                        &Notice::done(format!("Toggled task {} to {state}.", task.id)).to_string(),
                    )
                }
                None => self
                    .renderer
                    .render(&Notice::not_found("task", args.id).to_string()),
            },
            TaskCommands::Delete(args) => match self.store.delete_task(args.id).await {
                Some(task) => self.renderer.render(&DeleteResult::new(task).to_string()),
                None => self
                    .renderer
                    .render(&Notice::not_found("task", args.id).to_string()),
            },
            TaskCommands::Clear => {
                let removed = self.store.clear_completed().await;
                self.renderer.render(&ClearResult { removed }.to_string())
            }
        }
    }

    pub async fn handle_subtask_command(mut self, command: SubtaskCommands) -> Result<()> {
        match command {
            SubtaskCommands::Add(args) => {
                match self.store.add_subtask(args.task_id, &args.title).await? {
                    Some(subtask) => self
                        .renderer
                        .render(&CreateResult::new(subtask).to_string()),
                    None => self
                        .renderer
                        .render(&Notice::not_found("task", args.task_id).to_string()),
                }
            }
            SubtaskCommands::Toggle(args) => {
                match self
                    .store
                    .toggle_subtask(args.task_id, args.subtask_id)
                    .await
                {
                    Some(task) => {
                        let mut out =
                            Notice::done(format!("Toggled subtask {}.", args.subtask_id))
                                .to_string();
                        out.push('\n');
                        out.push_str(&task.to_string());
                        self.renderer.render(&out)
                    }
                    None => self
                        .renderer
                        .render(&Notice::not_found("subtask", args.subtask_id).to_string()),
                }
            }
            SubtaskCommands::Delete(args) => {
                match self
                    .store
                    .delete_subtask(args.task_id, args.subtask_id)
                    .await
                {
                    Some(subtask) => self
                        .renderer
                        .render(&DeleteResult::new(subtask).to_string()),
                    None => self
                        .renderer
                        .render(&Notice::not_found("subtask", args.subtask_id).to_string()),
                }
            }
        }
    }

    pub async fn handle_category_command(mut self, command: CategoryCommands) -> Result<()> {
        match command {
            CategoryCommands::List => {
                let categories = Categories(self.store.categories().to_vec());
                self.renderer.render(&categories.to_string())
            }
            CategoryCommands::Add(args) => {
                let category = self.store.add_category(&args.name, &args.color).await?;
                self.renderer
                    .render(&CreateResult::new(category).to_string())
            }
            CategoryCommands::Delete(args) => match self.store.delete_category(&args.id).await {
                Some(category) => self
                    .renderer
                    .render(&DeleteResult::new(category).to_string()),
                None => self
                    .renderer
                    .render(&Notice::not_found("category", &args.id).to_string()),
            },
        }
    }

    pub async fn handle_reminder_command(mut self, command: ReminderCommands) -> Result<()> {
        match command {
            ReminderCommands::List => {
                let reminders = Reminders(self.store.reminders().to_vec());
                self.renderer.render(&reminders.to_string())
            }
            ReminderCommands::Add(args) => {
                let reminder = self.store.add_reminder(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(reminder).to_string())
            }
            ReminderCommands::Toggle(args) => match self.store.toggle_reminder(args.id).await {
                Some(reminder) => {
                    let state = if reminder.completed { "done" } else { "open" };
                    self.renderer.render(
                        &Notice::done(format!("Toggled reminder {} to {state}.", reminder.id))
                            .to_string(),
                    )
                }
                None => self
                    .renderer
                    .render(&Notice::not_found("reminder", args.id).to_string()),
            },
            ReminderCommands::Delete(args) => match self.store.delete_reminder(args.id).await {
                Some(reminder) => self
                    .renderer
                    .render(&DeleteResult::new(reminder).to_string()),
                None => self
                    .renderer
                    .render(&Notice::not_found("reminder", args.id).to_string()),
            },
        }
    }
}

// ============================================================================
// Task commands
// ============================================================================

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks, optionally filtered
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show the full card for one task
    #[command(alias = "s")]
    Show(ShowTaskArgs),
    /// Update fields of an existing task
    #[command(alias = "u")]
    Update(UpdateTaskArgs),
    /// Flip a task's completion state (cascades to its subtasks)
    #[command(alias = "t")]
    Toggle(ToggleTaskArgs),
    /// Delete a task and its subtasks
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Remove every completed task
    Clear,
}

/// Add a new task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Title of the task
    pub title: String,
    /// Optional free-text description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Urgency of the task
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
    pub priority: PriorityArg,
    /// Category id to tag the task with
    #[arg(short, long = "category")]
    pub category_id: Option<String>,
    /// Due date in YYYY-MM-DD form
    #[arg(long, value_parser = parse_date)]
    pub due: Option<Date>,
    /// Related link as URL or URL|TITLE; repeat for multiple links
    #[arg(short, long = "link", value_parser = parse_link)]
    pub links: Vec<Link>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            title: val.title,
            description: val.description,
            priority: val.priority.into(),
            category_id: val.category_id,
            due_date: val.due,
            links: val.links,
        }
    }
}

/// List tasks, optionally filtered
///
/// All filters combine with AND; with no filters every task is listed in
/// insertion order.
#[derive(Args)]
pub struct ListTasksArgs {
    /// Case-insensitive substring match against title or description
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only tasks tagged with this category id
    #[arg(short, long = "category")]
    pub category_id: Option<String>,
    /// Only completed tasks
    #[arg(long)]
    pub completed: bool,
    /// Only open tasks
    #[arg(long, conflicts_with = "completed")]
    pub open: bool,
    /// Only tasks due on this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub due: Option<Date>,
}

impl From<ListTasksArgs> for TaskQuery {
    fn from(val: ListTasksArgs) -> Self {
        let completed = match (val.completed, val.open) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        TaskQuery {
            search: val.search,
            category_id: val.category_id,
            completed,
            due_on: val.due,
        }
    }
}

/// Show the full card for one task
#[derive(Args)]
pub struct ShowTaskArgs {
    /// ID of the task to show
    pub id: u64,
}

/// Update fields of an existing task
///
/// Omitted fields are left unchanged. Links are replaced as a whole: repeat
/// --link to set the new list, or pass --clear-links to remove them all.
#[derive(Args)]
pub struct UpdateTaskArgs {
    /// ID of the task to update
    pub id: u64,
    /// Updated title
    #[arg(short, long)]
    pub title: Option<String>,
    /// Updated description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Updated priority
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,
    /// Updated category id
    #[arg(short, long = "category")]
    pub category_id: Option<String>,
    /// Updated due date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub due: Option<Date>,
    /// Replacement link as URL or URL|TITLE; repeat for multiple links
    #[arg(short, long = "link", value_parser = parse_link)]
    pub links: Vec<Link>,
    /// Remove all links from the task
    #[arg(long, conflicts_with = "links")]
    pub clear_links: bool,
}

impl From<UpdateTaskArgs> for UpdateTask {
    fn from(val: UpdateTaskArgs) -> Self {
        // No --link and no --clear-links means "keep the stored links"
        let links = if val.clear_links {
            Some(Vec::new())
        } else if val.links.is_empty() {
            None
        } else {
            Some(val.links)
        };
        UpdateTask {
            title: val.title,
            description: val.description,
            priority: val.priority.map(Into::into),
            category_id: val.category_id,
            due_date: val.due,
            links,
        }
    }
}

/// Flip a task's completion state
#[derive(Args)]
pub struct ToggleTaskArgs {
    /// ID of the task to toggle
    pub id: u64,
}

/// Delete a task and its subtasks
#[derive(Args)]
pub struct DeleteTaskArgs {
    /// ID of the task to delete
    pub id: u64,
}

// ============================================================================
// Subtask commands
// ============================================================================

#[derive(Subcommand)]
pub enum SubtaskCommands {
    /// Add a subtask to a task's checklist
    #[command(alias = "a")]
    Add(AddSubtaskArgs),
    /// Flip a subtask's completion state (reconciles the parent)
    #[command(alias = "t")]
    Toggle(SubtaskRefArgs),
    /// Delete a subtask
    #[command(aliases = ["d", "rm"])]
    Delete(SubtaskRefArgs),
}

/// Add a subtask to a task's checklist
#[derive(Args)]
pub struct AddSubtaskArgs {
    /// ID of the task to attach the subtask to
    pub task_id: u64,
    /// Title of the subtask
    pub title: String,
}

/// Address one subtask within one task
#[derive(Args)]
pub struct SubtaskRefArgs {
    /// ID of the task the subtask belongs to
    pub task_id: u64,
    /// ID of the subtask
    pub subtask_id: u64,
}

// ============================================================================
// Category commands
// ============================================================================

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a user-defined category
    #[command(alias = "a")]
    Add(AddCategoryArgs),
    /// Delete a category (tasks keep their tag and render uncategorized)
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteCategoryArgs),
}

/// Add a user-defined category
#[derive(Args)]
pub struct AddCategoryArgs {
    /// Display name; the id is a slug derived from it
    pub name: String,
    /// Hex color for the category
    #[arg(long, default_value = lantern_core::models::FALLBACK_COLOR)]
    pub color: String,
}

/// Delete a category
#[derive(Args)]
pub struct DeleteCategoryArgs {
    /// Slug id of the category to delete
    pub id: String,
}

// ============================================================================
// Reminder commands
// ============================================================================

#[derive(Subcommand)]
pub enum ReminderCommands {
    /// List all reminders
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a reminder
    #[command(alias = "a")]
    Add(AddReminderArgs),
    /// Flip a reminder's completion state
    #[command(alias = "t")]
    Toggle(ReminderRefArgs),
    /// Delete a reminder
    #[command(aliases = ["d", "rm"])]
    Delete(ReminderRefArgs),
}

/// Add a reminder
#[derive(Args)]
pub struct AddReminderArgs {
    /// Reminder text
    pub text: String,
    /// Date the reminder is for (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<Date>,
    /// Urgency of the reminder
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
    pub priority: PriorityArg,
    /// Free-form category label
    #[arg(short, long)]
    pub category: Option<String>,
}

impl From<AddReminderArgs> for CreateReminder {
    fn from(val: AddReminderArgs) -> Self {
        CreateReminder {
            text: val.text,
            date: val.date,
            priority: val.priority.into(),
            category: val.category,
        }
    }
}

/// Address one reminder
#[derive(Args)]
pub struct ReminderRefArgs {
    /// ID of the reminder
    pub id: u64,
}

// ============================================================================
// Shared argument types
// ============================================================================

/// Command-line representation of task priority
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::High => write!(f, "high"),
        }
    }
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

fn parse_date(s: &str) -> Result<Date, String> {
    s.parse::<Date>()
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_link(s: &str) -> Result<Link, String> {
    let (url, title) = match s.split_once('|') {
        Some((url, title)) => (url.trim(), Some(title.trim().to_string())),
        None => (s.trim(), None),
    };
    if url.is_empty() {
        return Err("link URL must not be empty".to_string());
    }
    Ok(Link {
        url: url.to_string(),
        title: title.filter(|t| !t.is_empty()),
    })
}

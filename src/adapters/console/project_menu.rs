use super::input;
use crate::application::AppResult;
use crate::domain::{Project, Task, TaskMatcher};

/// The per-project interaction loop, entered from the main menu's
/// "manage project" command.
pub struct ProjectMenu;

impl ProjectMenu {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, project: &mut Project) -> AppResult<()> {
        loop {
            print_menu(project);
            let Some(line) = input::read_command("> ")? else {
                break;
            };

            match input::first_char(&line) {
                'O' => overview(project),
                'A' => add_task(project)?,
                'L' => list_tasks(project, &TaskMatcher::NotDone),
                'P' => list_by_prio(project)?,
                'T' => list_by_assignee(project)?,
                'C' => claim_task(project)?,
                'S' => set_task_state(project)?,
                'Y' => set_task_prio(project)?,
                'R' => remove_task(project)?,
                'X' => break,
                '\0' => {}
                _ => println!("Unknown command"),
            }
        }
        Ok(())
    }
}

impl Default for ProjectMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn print_menu(project: &Project) {
    println!("--- Project: {project} ---");
    println!("O - overview");
    println!("A - add task");
    println!("L - list tasks (not done)");
    println!("P - list tasks by priority");
    println!("T - list tasks by assignee");
    println!("C - claim task");
    println!("S - set task state");
    println!("Y - set task priority");
    println!("R - remove task");
    println!("X - back");
    println!("-----------------");
}

fn overview(project: &Project) {
    println!("{} - {}", project.id(), project.title());
    if !project.description().is_empty() {
        println!("{}", project.description());
    }
    println!("state: {}", project.state());
    println!("created: {}", project.created());
    println!("last updated: {}", project.last_updated());
    println!("tasks: {}", project.tasks().len());
}

fn add_task(project: &mut Project) -> AppResult<()> {
    let description = input::prompt("Task description: ")?;
    let Some(prio) = input::parse_prio(&input::prompt("Priority (high/medium/low): ")?) else {
        println!("Not a valid priority");
        return Ok(());
    };

    let project_id = project.id();
    let task = project.add_task(description, prio);
    tracing::info!("Added task {} to project {}", task.id(), project_id);
    println!("Task created: {}", format_task(task));
    Ok(())
}

fn list_tasks(project: &Project, matcher: &TaskMatcher) {
    let tasks = project.find_tasks(matcher);
    if tasks.is_empty() {
        println!("No matches.");
    } else {
        for task in &tasks {
            println!("{}", format_task(task));
        }
    }
}

fn list_by_prio(project: &Project) -> AppResult<()> {
    let Some(prio) = input::parse_prio(&input::prompt("Priority (high/medium/low): ")?) else {
        println!("Not a valid priority");
        return Ok(());
    };
    list_tasks(project, &TaskMatcher::Prio(prio));
    Ok(())
}

fn list_by_assignee(project: &Project) -> AppResult<()> {
    let name = input::prompt("Assignee name? ")?;
    list_tasks(project, &TaskMatcher::TakenBy(name));
    Ok(())
}

fn claim_task(project: &mut Project) -> AppResult<()> {
    let Some(id) = input::parse_id(&input::prompt("Task id? ")?) else {
        println!("Not a valid id");
        return Ok(());
    };
    let Some(task) = project.task_by_id_mut(id.into()) else {
        println!("Task not found");
        return Ok(());
    };

    let name = input::prompt("Your name? ")?;
    match task.take(name) {
        Ok(()) => println!("Task claimed: {}", format_task(task)),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn set_task_state(project: &mut Project) -> AppResult<()> {
    let Some(id) = input::parse_id(&input::prompt("Task id? ")?) else {
        println!("Not a valid id");
        return Ok(());
    };
    let Some(task) = project.task_by_id_mut(id.into()) else {
        println!("Task not found");
        return Ok(());
    };

    let Some(state) = input::parse_state(&input::prompt("State (todo/in progress/done): ")?)
    else {
        println!("Not a valid state");
        return Ok(());
    };
    task.set_state(state);
    println!("Task updated: {}", format_task(task));
    Ok(())
}

fn set_task_prio(project: &mut Project) -> AppResult<()> {
    let Some(id) = input::parse_id(&input::prompt("Task id? ")?) else {
        println!("Not a valid id");
        return Ok(());
    };
    let Some(task) = project.task_by_id_mut(id.into()) else {
        println!("Task not found");
        return Ok(());
    };

    let Some(prio) = input::parse_prio(&input::prompt("Priority (high/medium/low): ")?) else {
        println!("Not a valid priority");
        return Ok(());
    };
    task.set_prio(prio);
    println!("Task updated: {}", format_task(task));
    Ok(())
}

fn remove_task(project: &mut Project) -> AppResult<()> {
    let Some(id) = input::parse_id(&input::prompt("Task id? ")?) else {
        println!("Not a valid id");
        return Ok(());
    };
    let Some(task) = project.task_by_id(id.into()).cloned() else {
        println!("Task not found");
        return Ok(());
    };

    // Removal goes by task value, so with duplicate descriptions the first
    // equal task is the one that leaves.
    if project.remove_task(&task) {
        tracing::info!("Removed task {} from project {}", task.id(), project.id());
        println!("Task removed");
    } else {
        println!("Task not found");
    }
    Ok(())
}

fn format_task(task: &Task) -> String {
    let assignee = match task.taken_by() {
        Some(name) if !name.is_empty() => format!(", taken by {name}"),
        _ => String::new(),
    };
    format!(
        "[{}] {} ({}) - {}{}",
        task.id(),
        task.description(),
        task.prio(),
        task.state(),
        assignee
    )
}

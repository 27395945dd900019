use super::{input, project_menu::ProjectMenu};
use crate::application::{AppResult, Tracker};

/// The top-level interaction loop: project-level commands dispatched on the
/// first character of each input line.
pub struct MainMenu {
    project_menu: ProjectMenu,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            project_menu: ProjectMenu::new(),
        }
    }

    pub fn run(&self, tracker: &mut Tracker) -> AppResult<()> {
        loop {
            print_menu();
            let Some(line) = input::read_command("> ")? else {
                break;
            };

            match input::first_char(&line) {
                'F' => self.find_projects(tracker)?,
                'A' => self.add_project(tracker)?,
                'M' => self.manage_project(tracker)?,
                'R' => self.remove_project(tracker)?,
                'X' => break,
                '\0' => {}
                _ => println!("Unknown command"),
            }
        }
        Ok(())
    }

    fn find_projects(&self, tracker: &Tracker) -> AppResult<()> {
        let needle = input::prompt("Project title? ")?;
        let result = tracker.manager().find_projects(&needle);

        if result.is_empty() {
            println!("No matches.");
        } else {
            for project in result {
                println!("{} - {} ({})", project.id(), project, project.state());
            }
        }
        Ok(())
    }

    fn add_project(&self, tracker: &mut Tracker) -> AppResult<()> {
        let title = input::prompt("Project title: ")?;
        let description = input::prompt("Description: ")?;

        match tracker.manager_mut().add_project(title, description) {
            Ok(project) => {
                tracing::info!("Created project {} ({})", project.id(), project);
                println!("Project created: {project}");
            }
            Err(e) => println!("{e}"),
        }
        Ok(())
    }

    fn manage_project(&self, tracker: &mut Tracker) -> AppResult<()> {
        let Some(id) = input::parse_id(&input::prompt("Project id? ")?) else {
            println!("Not a valid id");
            return Ok(());
        };

        match tracker.manager_mut().project_by_id_mut(id.into()) {
            Some(project) => self.project_menu.run(project)?,
            None => println!("Project not found"),
        }
        Ok(())
    }

    fn remove_project(&self, tracker: &mut Tracker) -> AppResult<()> {
        let Some(id) = input::parse_id(&input::prompt("Project id? ")?) else {
            println!("Not a valid id");
            return Ok(());
        };

        let Some(project) = tracker.manager().project_by_id(id.into()).cloned() else {
            println!("Project not found");
            return Ok(());
        };

        tracker.manager_mut().remove_project(&project);
        tracing::info!("Removed project {} ({})", project.id(), project);
        println!("Project removed");
        Ok(())
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn print_menu() {
    println!("--- Main menu ---");
    println!("F - find projects");
    println!("A - add project");
    println!("M - manage project");
    println!("R - remove project");
    println!("X - exit");
    println!("-----------------");
}

//! Menu-driven roster shell.
//!
//! # Responsibility
//! - Prompt for menu choices and field values.
//! - Map each choice onto one `EmployeeService` call and print the outcome.
//!
//! # Invariants
//! - Store failures are printed and the loop continues.
//! - The loop ends only on a confirmed exit or end of input.

use log::{error, info};
use roster_core::{Employee, EmployeeId, EmployeeRepository, EmployeeService, RepoError};
use std::io::{self, Write};

const MENU_RULE: &str = "================================";
const RECORD_RULE: &str = "----------------------------";
const RETRY_NUMBER_PROMPT: &str = "Invalid input. Please enter a number: ";

/// Source of user input lines.
pub trait LineReader {
    /// Shows `prompt` and reads one line. `Ok(None)` means input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    ListAll,
    Find,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    fn from_number(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Add),
            2 => Some(Self::ListAll),
            3 => Some(Self::Find),
            4 => Some(Self::Update),
            5 => Some(Self::Delete),
            6 => Some(Self::Exit),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::ListAll => "list",
            Self::Find => "find",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Exit => "exit",
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive loop over a roster service.
pub struct Shell<R: EmployeeRepository, I: LineReader, W: Write> {
    service: EmployeeService<R>,
    input: I,
    out: W,
}

impl<R: EmployeeRepository, I: LineReader, W: Write> Shell<R, I, W> {
    pub fn new(service: EmployeeService<R>, input: I, out: W) -> Self {
        Self {
            service,
            input,
            out,
        }
    }

    /// Runs until the user confirms exit or input ends.
    ///
    /// # Errors
    /// Returns terminal I/O failures; store failures are reported inline.
    pub fn run(&mut self) -> io::Result<()> {
        info!("event=shell_start module=shell status=ok");

        loop {
            self.print_menu()?;
            let Some(number) = self.read_number::<i64>("Enter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::from_number(number) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(self.out, "Invalid option! Please try again.")?;
                    Flow::Continue
                }
            };
            self.out.flush()?;

            if let Flow::Exit = flow {
                break;
            }
        }

        info!("event=shell_exit module=shell status=ok");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        let outcome = match choice {
            MenuChoice::Add => self.add_employee(),
            MenuChoice::ListAll => self.list_employees(),
            MenuChoice::Find => self.find_employee(),
            MenuChoice::Update => self.update_employee(),
            MenuChoice::Delete => self.delete_employee(),
            MenuChoice::Exit => return self.confirm_exit(),
        };

        match outcome {
            Ok(flow) => Ok(flow),
            Err(ShellError::Io(err)) => Err(err),
            Err(ShellError::Store(err)) => {
                error!(
                    "event=shell_command module=shell status=error command={} error={}",
                    choice.as_str(),
                    err
                );
                writeln!(self.out, "Error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_employee(&mut self) -> Result<Flow, ShellError> {
        let Some(id) = self.read_number::<EmployeeId>("Enter Employee ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.read_text("Enter Employee Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(department) = self.read_text("Enter Employee Department: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(salary) = self.read_salary("Enter Employee Salary: ")? else {
            return Ok(Flow::Exit);
        };

        if self
            .service
            .add_employee(Employee::new(id, name, department, salary))?
        {
            writeln!(self.out, "Employee added successfully!")?;
        } else {
            writeln!(
                self.out,
                "Failed to add employee. Employee ID may already exist."
            )?;
        }
        Ok(Flow::Continue)
    }

    fn list_employees(&mut self) -> Result<Flow, ShellError> {
        let employees = self.service.list_employees()?;
        if employees.is_empty() {
            writeln!(self.out, "No employees found.")?;
        } else {
            writeln!(self.out, "Employee List:")?;
            for employee in &employees {
                self.print_employee(employee)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn find_employee(&mut self) -> Result<Flow, ShellError> {
        let Some(id) = self.read_number::<EmployeeId>("Enter Employee ID: ")? else {
            return Ok(Flow::Exit);
        };

        match self.service.find_employee(id)? {
            Some(employee) => self.print_employee(&employee)?,
            None => writeln!(self.out, "Employee with ID {id} not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn update_employee(&mut self) -> Result<Flow, ShellError> {
        let Some(id) = self.read_number::<EmployeeId>("Enter Employee ID to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.read_text("Enter New Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(department) = self.read_text("Enter New Department: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(salary) = self.read_salary("Enter New Salary: ")? else {
            return Ok(Flow::Exit);
        };

        if self
            .service
            .update_employee(id, name, department, salary)?
        {
            writeln!(self.out, "Employee details updated successfully!")?;
        } else {
            writeln!(
                self.out,
                "Failed to update employee. Please check the ID and try again."
            )?;
        }
        Ok(Flow::Continue)
    }

    fn delete_employee(&mut self) -> Result<Flow, ShellError> {
        let Some(id) = self.read_number::<EmployeeId>("Enter Employee ID to delete: ")? else {
            return Ok(Flow::Exit);
        };

        if self.service.delete_employee(id)? {
            writeln!(self.out, "Employee deleted successfully!")?;
        } else {
            writeln!(
                self.out,
                "Failed to delete employee. Please check the ID and try again."
            )?;
        }
        Ok(Flow::Continue)
    }

    fn confirm_exit(&mut self) -> io::Result<Flow> {
        match self.read_text("Are you sure you want to exit? (yes/no): ")? {
            Some(answer) if !answer.trim().eq_ignore_ascii_case("yes") => Ok(Flow::Continue),
            _ => Ok(Flow::Exit),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{MENU_RULE}")?;
        writeln!(self.out, "Employee Management System")?;
        writeln!(self.out, "1. Add a new employee.")?;
        writeln!(self.out, "2. View all employees.")?;
        writeln!(self.out, "3. Search for an employee by ID.")?;
        writeln!(self.out, "4. Update employee details.")?;
        writeln!(self.out, "5. Delete an employee.")?;
        writeln!(self.out, "6. Exit.")?;
        writeln!(self.out, "{MENU_RULE}")?;
        self.out.flush()
    }

    fn print_employee(&mut self, employee: &Employee) -> io::Result<()> {
        writeln!(self.out, "{RECORD_RULE}")?;
        writeln!(self.out, "ID: {}", employee.id)?;
        writeln!(self.out, "Name: {}", employee.name)?;
        writeln!(self.out, "Department: {}", employee.department)?;
        writeln!(self.out, "Salary: {:?}", employee.salary)
    }

    fn read_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.input.read_line(prompt)
    }

    /// Re-prompts until the line parses as `T`.
    fn read_number<T: std::str::FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        self.read_parsed(prompt, |line| line.parse().ok())
    }

    fn read_salary(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.read_parsed(prompt, |line| {
            line.parse::<f64>().ok().filter(|value| value.is_finite())
        })
    }

    fn read_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        let mut prompt = prompt;
        loop {
            let Some(line) = self.input.read_line(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse(line.trim()) {
                return Ok(Some(value));
            }
            prompt = RETRY_NUMBER_PROMPT;
        }
    }
}

/// Failure inside one menu command.
enum ShellError {
    Io(io::Error),
    Store(RepoError),
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ShellError {
    fn from(value: RepoError) -> Self {
        Self::Store(value)
    }
}

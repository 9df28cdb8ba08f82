//! Line-oriented command interpreter over a [`PlannerStore`].
//!
//! Each input line is one command. Blank lines and lines starting with `#`
//! are ignored. Arguments are separated by whitespace; double quotes group
//! words into one argument (e.g., `add "CS 1301" 3 A Fall 2024 Intro`).

use crate::core::catalog::CourseQuery;
use crate::core::error::StoreError;
use crate::core::models::{NewCompletedCourse, UserUpdate};
use crate::core::report::{default_report_path, reporter_for, ReportContext, ReportFormat};
use crate::core::store::PlannerStore;
use crate::core::views;
use crate::debug;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const HELP: &str = "\
Commands:
  catalog [TEXT]                          search the course catalog
  add CODE CREDITS GRADE TERM YEAR TITLE  record a completed course
  record                                  show the transcript by semester
  gpa                                     show the overall GPA
  plan SLOT COURSE_ID                     plan a catalog course (slot: fall-2025)
  unplan SLOT COURSE_ID                   remove a planned course
  grid                                    show the planning grid
  requirements                            show requirement progress
  dashboard                               show degree progress
  profile                                 show the student profile
  set FIELD VALUE                         update one profile field
  report md|html [PATH]                   write a progress report
  help                                    show this help
  quit | exit                             end the session";

/// Reasons a session command fails. The store is unchanged on every error.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Wrong number or shape of arguments
    #[error("usage: {0}")]
    Usage(String),

    /// First word is not a command
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// Course id not in the catalog
    #[error("no course with id '{0}' in the catalog")]
    UnknownCourse(String),

    /// A numeric argument did not parse
    #[error("invalid number: '{0}'")]
    InvalidNumber(String),

    /// The store rejected the mutation
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Report rendering or writing failed
    #[error("report failed: {0}")]
    Report(String),

    /// Reading input or writing output failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result of executing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user (may be empty)
    Output(String),
    /// The user ended the session
    Quit,
}

/// Counters for a completed [`Session::run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands executed, failures included
    pub commands: usize,
    /// Commands that failed
    pub errors: usize,
}

/// An interactive session owning the store
#[derive(Debug)]
pub struct Session {
    store: PlannerStore,
    start_year: i32,
    horizon_years: u32,
    reports_dir: PathBuf,
}

/// Split a line into arguments, honouring double quotes
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if has_token {
        tokens.push(current);
    }
    tokens
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, SessionError> {
    value
        .parse()
        .map_err(|_| SessionError::InvalidNumber(value.to_string()))
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Build a single-field profile update from `set FIELD VALUE`
fn profile_update(field: &str, value: &str) -> Result<UserUpdate, SessionError> {
    let mut update = UserUpdate::default();
    match field {
        "name" => update.name = Some(value.to_string()),
        "email" => update.email = Some(value.to_string()),
        "major" => update.major = Some(value.to_string()),
        "threads" => update.threads = Some(parse_list(value)),
        "minors" => update.minors = Some(parse_list(value)),
        "expected_graduation" | "expected-graduation" => {
            update.expected_graduation = Some(value.to_string());
        }
        "total_credits" | "total-credits" => update.total_credits = Some(parse_number(value)?),
        "completed_credits" | "completed-credits" => {
            update.completed_credits = Some(parse_number(value)?);
        }
        "gpa" => {
            let gpa: f64 = parse_number(value)?;
            if !gpa.is_finite() {
                return Err(SessionError::InvalidNumber(value.to_string()));
            }
            update.gpa = Some(gpa);
        }
        _ => {
            return Err(SessionError::Usage(format!(
                "set FIELD VALUE (unknown field '{field}'; fields: name, email, major, \
                 threads, minors, expected_graduation, total_credits, completed_credits, gpa)"
            )))
        }
    }
    Ok(update)
}

impl Session {
    /// Start a session over `store`.
    ///
    /// # Arguments
    /// * `start_year` - Year of the first fall shown by `grid`
    /// * `horizon_years` - Academic years shown by `grid`
    /// * `reports_dir` - Where `report` writes when no path is given
    #[must_use]
    pub fn new(store: PlannerStore, start_year: i32, horizon_years: u32, reports_dir: PathBuf) -> Self {
        Self {
            store,
            start_year,
            horizon_years,
            reports_dir,
        }
    }

    /// The store behind the session
    #[must_use]
    pub const fn store(&self) -> &PlannerStore {
        &self.store
    }

    /// End the session, keeping the store
    #[must_use]
    pub fn into_store(self) -> PlannerStore {
        self.store
    }

    /// Execute one command line
    ///
    /// # Errors
    /// Returns a [`SessionError`] describing why the command was rejected.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Outcome::Output(String::new()));
        }

        let tokens = tokenize(line);
        let Some((command, args)) = tokens.split_first() else {
            return Ok(Outcome::Output(String::new()));
        };
        debug!("Session command: {command} ({} args)", args.len());

        let state = self.store.state();
        let output = match command.to_lowercase().as_str() {
            "help" | "?" => HELP.to_string(),
            "quit" | "exit" => return Ok(Outcome::Quit),
            "catalog" => views::catalog_listing(state, &CourseQuery::text(&args.join(" "))),
            "record" => views::transcript_listing(state),
            "gpa" => views::gpa_line(state),
            "grid" => views::planning_grid(state, self.start_year, self.horizon_years),
            "requirements" => views::requirements_listing(state),
            "dashboard" => views::dashboard(state),
            "profile" => views::profile(state),
            "add" => self.add(args)?,
            "plan" => self.plan(args)?,
            "unplan" => self.unplan(args)?,
            "set" => self.set(args)?,
            "report" => self.report(args)?,
            other => return Err(SessionError::UnknownCommand(other.to_string())),
        };
        Ok(Outcome::Output(output))
    }

    fn add(&mut self, args: &[String]) -> Result<String, SessionError> {
        let [code, credits, grade, term, year, title @ ..] = args else {
            return Err(SessionError::Usage(
                "add CODE CREDITS GRADE TERM YEAR TITLE...".to_string(),
            ));
        };
        if title.is_empty() {
            return Err(SessionError::Usage(
                "add CODE CREDITS GRADE TERM YEAR TITLE...".to_string(),
            ));
        }
        let request = NewCompletedCourse::new(
            code,
            &title.join(" "),
            parse_number(credits)?,
            grade,
            term,
            parse_number(year)?,
        );
        let id = self.store.add_completed_course(request)?;
        Ok(format!("✓ Recorded {code} ({grade}, {credits} cr) as {id}"))
    }

    fn plan(&mut self, args: &[String]) -> Result<String, SessionError> {
        let [slot, course_id] = args else {
            return Err(SessionError::Usage("plan SLOT COURSE_ID".to_string()));
        };
        let course = self
            .store
            .state()
            .course(course_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownCourse(course_id.clone()))?;
        let code = course.code.clone();
        self.store.plan_course(slot, course)?;
        Ok(format!("✓ Planned {code} in {slot}"))
    }

    fn unplan(&mut self, args: &[String]) -> Result<String, SessionError> {
        let [slot, course_id] = args else {
            return Err(SessionError::Usage("unplan SLOT COURSE_ID".to_string()));
        };
        self.store.remove_planned_course(slot, course_id)?;
        Ok(format!("✓ Removed {course_id} from {slot}"))
    }

    fn set(&mut self, args: &[String]) -> Result<String, SessionError> {
        let [field, value @ ..] = args else {
            return Err(SessionError::Usage("set FIELD VALUE".to_string()));
        };
        if value.is_empty() {
            return Err(SessionError::Usage("set FIELD VALUE".to_string()));
        }
        let update = profile_update(field, &value.join(" "))?;
        self.store.update_user(update)?;
        Ok(format!("✓ Updated {field}"))
    }

    fn report(&self, args: &[String]) -> Result<String, SessionError> {
        let (format, path) = match args {
            [format] => (format, None),
            [format, path] => (format, Some(Path::new(path))),
            _ => return Err(SessionError::Usage("report md|html [PATH]".to_string())),
        };
        let format: ReportFormat = format.parse().map_err(SessionError::Usage)?;
        let path = path.map_or_else(
            || default_report_path(&self.reports_dir, format),
            Path::to_path_buf,
        );

        let ctx = ReportContext::from_state(self.store.state());
        reporter_for(format)
            .generate(&ctx, &path)
            .map_err(|e| SessionError::Report(e.to_string()))?;
        Ok(format!("✓ Report written to {}", path.display()))
    }

    /// Execute every line of `input`, writing results to `output`, until the
    /// input ends or a `quit` command. Failed commands are reported and the
    /// session continues.
    ///
    /// # Arguments
    /// * `prompt` - Printed before each line is read (empty for scripts)
    ///
    /// # Errors
    /// Returns an I/O error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
        prompt: &str,
    ) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut lines = input.lines();
        loop {
            if !prompt.is_empty() {
                write!(output, "{prompt}")?;
                output.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            summary.commands += 1;
            match self.execute(trimmed) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Output(text)) => {
                    if !text.is_empty() {
                        writeln!(output, "{text}")?;
                    }
                }
                Err(err) => {
                    summary.errors += 1;
                    writeln!(output, "✗ {err}")?;
                }
            }
        }
        Ok(summary)
    }
}

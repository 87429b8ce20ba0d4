//! The interactive menu shell.
//!
//! Presents the numbered menu, collects the inputs each action needs,
//! delegates to [`App`], and renders the outcome. The loop never
//! terminates on an operational error: not-found and duplicate outcomes
//! are rendered messages, and input-conversion failures are printed,
//! logged, and skipped.
//!
//! Generic over `BufRead`/`Write` so tests can drive complete scripted
//! sessions through an in-memory console.

use std::io::{self, BufRead, Write};

use hospital_core::CoreError;

use crate::app::App;

/// Why the shell loop ended.
///
/// Returned to the caller instead of exiting the process from inside the
/// loop; `main` decides what a shutdown looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOutcome {
    /// The user selected the exit option.
    Exit,
    /// Input reached end-of-file before an exit selection.
    Eof,
}

/// Per-iteration control flow inside the loop.
enum Flow {
    Continue,
    Exit,
    Eof,
}

/// The menu-driven console shell.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell { input, output }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Only console I/O errors propagate; every operational error is
    /// rendered and the loop continues.
    pub fn run(&mut self, app: &mut App) -> io::Result<ShellOutcome> {
        loop {
            self.print_menu()?;
            let choice = match self.prompt("Enter your choice: ")? {
                Some(choice) => choice,
                None => return Ok(ShellOutcome::Eof),
            };
            match self.dispatch(app, &choice)? {
                Flow::Continue => {}
                Flow::Exit => return Ok(ShellOutcome::Exit),
                Flow::Eof => return Ok(ShellOutcome::Eof),
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "========= HOSPITAL MANAGEMENT SYSTEM =========")?;
        writeln!(self.output, "1. Add Patient")?;
        writeln!(self.output, "2. Add Doctor")?;
        writeln!(self.output, "3. Assign Doctor to Patient")?;
        writeln!(self.output, "4. Search Patient")?;
        writeln!(self.output, "5. Search Doctor")?;
        writeln!(self.output, "6. View All Patients")?;
        writeln!(self.output, "7. View All Doctors")?;
        writeln!(self.output, "8. Discharge Patient")?;
        writeln!(self.output, "9. Exit")
    }

    fn dispatch(&mut self, app: &mut App, choice: &str) -> io::Result<Flow> {
        match choice {
            "1" => self.add_patient(app),
            "2" => self.add_doctor(app),
            "3" => self.assign_doctor(app),
            "4" => self.search_patient(app),
            "5" => self.search_doctor(app),
            "6" => self.view_patients(app),
            "7" => self.view_doctors(app),
            "8" => self.discharge(app),
            "9" => {
                writeln!(self.output, "Exiting System... Goodbye!")?;
                Ok(Flow::Exit)
            }
            _ => {
                writeln!(self.output, "Invalid choice. Try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    // -------------------------------------------------------------------
    // Menu actions
    // -------------------------------------------------------------------

    fn add_patient(&mut self, app: &mut App) -> io::Result<Flow> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Eof);
        };
        let Some(age_raw) = self.prompt("Age: ")? else {
            return Ok(Flow::Eof);
        };
        let age: u32 = match age_raw.trim().parse() {
            Ok(age) => age,
            Err(_) => return self.runtime_error(&format!("invalid age: '{}'", age_raw)),
        };
        let Some(patient_id) = self.prompt("Patient ID: ")? else {
            return Ok(Flow::Eof);
        };
        let Some(disease) = self.prompt("Disease: ")? else {
            return Ok(Flow::Eof);
        };

        match app.add_patient(name, age, patient_id, disease) {
            Ok(()) => writeln!(self.output, "Patient Added Successfully")?,
            Err(CoreError::DuplicatePatient { .. }) => {
                writeln!(self.output, "Patient ID already exists.")?
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_doctor(&mut self, app: &mut App) -> io::Result<Flow> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Eof);
        };
        let Some(specialization) = self.prompt("Specialization: ")? else {
            return Ok(Flow::Eof);
        };
        let Some(doctor_id) = self.prompt("Doctor ID: ")? else {
            return Ok(Flow::Eof);
        };

        match app.add_doctor(name, specialization, doctor_id) {
            Ok(()) => writeln!(self.output, "Doctor Added Successfully")?,
            Err(CoreError::DuplicateDoctor { .. }) => {
                writeln!(self.output, "Doctor ID already exists.")?
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn assign_doctor(&mut self, app: &mut App) -> io::Result<Flow> {
        let Some(patient_id) = self.prompt("Patient ID: ")? else {
            return Ok(Flow::Eof);
        };
        let Some(doctor_id) = self.prompt("Doctor ID: ")? else {
            return Ok(Flow::Eof);
        };

        match app.assign_doctor(&patient_id, &doctor_id) {
            Ok((patient, doctor)) => writeln!(
                self.output,
                "Doctor {} assigned to patient {}",
                doctor.name, patient.name
            )?,
            Err(CoreError::PatientNotFound { .. }) => {
                writeln!(self.output, "Patient not found")?
            }
            Err(CoreError::DoctorNotFound { .. }) => {
                writeln!(self.output, "Doctor not found")?
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_patient(&mut self, app: &mut App) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter Patient ID: ")? else {
            return Ok(Flow::Eof);
        };
        match app.search_patient(&id) {
            Some(patient) => writeln!(self.output, "{}", patient)?,
            None => writeln!(self.output, "Patient Not Found")?,
        }
        Ok(Flow::Continue)
    }

    fn search_doctor(&mut self, app: &mut App) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter Doctor ID: ")? else {
            return Ok(Flow::Eof);
        };
        match app.search_doctor(&id) {
            Some(doctor) => writeln!(self.output, "{}", doctor)?,
            None => writeln!(self.output, "Doctor Not Found")?,
        }
        Ok(Flow::Continue)
    }

    fn view_patients(&mut self, app: &mut App) -> io::Result<Flow> {
        for patient in app.patients() {
            writeln!(self.output, "{}", patient)?;
        }
        Ok(Flow::Continue)
    }

    fn view_doctors(&mut self, app: &mut App) -> io::Result<Flow> {
        for doctor in app.doctors() {
            writeln!(self.output, "{}", doctor)?;
        }
        Ok(Flow::Continue)
    }

    fn discharge(&mut self, app: &mut App) -> io::Result<Flow> {
        let Some(id) = self.prompt("Enter Patient ID: ")? else {
            return Ok(Flow::Eof);
        };
        match app.discharge(&id) {
            Ok(()) => writeln!(self.output, "Patient Discharged Successfully")?,
            Err(CoreError::PatientNotFound { .. }) => {
                writeln!(self.output, "Patient Not Found")?
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    // -------------------------------------------------------------------
    // Console helpers
    // -------------------------------------------------------------------

    /// Writes a prompt label and reads one line.
    ///
    /// Returns `None` at end-of-file. The trailing newline is stripped;
    /// interior whitespace is preserved as typed.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Reports a recoverable input error: rendered for the user, logged,
    /// and the loop continues.
    fn runtime_error(&mut self, msg: &str) -> io::Result<Flow> {
        writeln!(self.output, "Error: {}", msg)?;
        tracing::error!("runtime error: {}", msg);
        Ok(Flow::Continue)
    }
}

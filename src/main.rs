//! Command-line interface for the clinic booking core.
//!
//! Stands in for the site's views: a sign-in form, the patient booking
//! form, and the staff dashboard. The session role decides which menu is
//! shown, and all state lives in the store and session handles passed in
//! from `main`.

use std::io::{self, Write};

use chrono::{Local, TimeZone};
use entbook::{
    Appointment, AppointmentDraft, AppointmentStore, Config, Role, Service, Session,
};

struct BookingCli {
    session: Session,
    store: AppointmentStore,
    running: bool,
}

impl BookingCli {
    fn new(session: Session, store: AppointmentStore) -> Self {
        BookingCli {
            session,
            store,
            running: true,
        }
    }

    fn print_header(&self) {
        println!("\n{}", "=".repeat(60));
        println!("       HARBORVIEW ENT CLINIC — APPOINTMENTS");
        println!("{}", "=".repeat(60));
    }

    fn get_input(&self, prompt: &str, default: Option<&str>) -> String {
        if let Some(def) = default {
            print!("{} [{}]: ", prompt, def);
        } else {
            print!("{}: ", prompt);
        }
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return String::new();
        }
        let input = input.trim();

        if input.is_empty() {
            default.unwrap_or("").to_string()
        } else {
            input.to_string()
        }
    }

    fn get_int_input(&self, prompt: &str, default: Option<i32>) -> i32 {
        loop {
            let default_str = default.map(|d| d.to_string());
            let input = self.get_input(prompt, default_str.as_deref());

            if let Ok(value) = input.parse::<i32>() {
                return value;
            }
            println!("Please enter a valid number");
        }
    }

    fn sign_in(&mut self) {
        println!("\n--- Sign In ---");
        println!("(press Enter on an empty username to go back)");

        loop {
            let identifier = self.get_input("Username", None);
            if identifier.is_empty() {
                return;
            }
            let secret = self.get_input("Password", None);

            // The form stays open on failure; every attempt is evaluated
            // fresh against the same rules.
            match self.session.authenticate(&identifier, &secret) {
                Ok(Role::Staff) => {
                    println!("\nSigned in as staff.");
                    return;
                }
                Ok(_) => {
                    println!("\nWelcome, {}! You can now book an appointment.", identifier);
                    return;
                }
                Err(e) => println!("{}", e),
            }
        }
    }

    fn book_appointment(&mut self) {
        println!("\n--- Book an Appointment ---");

        let patient_name = self.get_input("Patient name", None);
        let email = self.get_input("Email", None);
        let phone = self.get_input("Phone", None);

        println!("\nServices:");
        for (i, service) in Service::all().iter().enumerate() {
            println!("  {}. {}", i + 1, service);
        }
        let service = loop {
            let input = self.get_input("Service (number or name)", Some("1"));
            if let Ok(n) = input.parse::<usize>() {
                if let Some(service) = Service::all().get(n.wrapping_sub(1)) {
                    break *service;
                }
                println!("Please choose one of the listed services");
                continue;
            }
            match Service::from_string(&input) {
                Ok(service) => break service,
                Err(e) => println!("{}", e),
            }
        };

        let date = self.get_input("Preferred date (YYYY-MM-DD)", None);

        let draft = match AppointmentDraft::new(patient_name, email, phone, service, date) {
            Ok(draft) => draft,
            Err(e) => {
                println!("\n{}", e);
                return;
            }
        };

        match self.store.add(draft) {
            Ok(appointment) => {
                println!("\nAppointment requested for {}", appointment.patient_name);
                println!("Service: {}", appointment.service);
                println!("Date: {}", appointment.date);
                println!("Reference: {}", &appointment.id[..8]);
            }
            Err(e) => println!("\nCould not save the appointment: {}", e),
        }
    }

    fn view_dashboard(&self) {
        let pending = self.store.list_pending();

        println!(
            "\n--- Dashboard ({} pending) ---",
            self.store.pending_count()
        );

        if pending.is_empty() {
            println!("No pending appointments");
            return;
        }

        for (i, apt) in pending.iter().enumerate() {
            println!(
                "  {}. {} — {} on {}",
                i + 1,
                apt.patient_name,
                apt.service,
                apt.date
            );
            println!(
                "     {} | {} | requested {}",
                apt.email,
                apt.phone,
                format_created_at(apt)
            );
        }
    }

    fn complete_appointment(&mut self, keep_record: bool) {
        let pending = self.store.list_pending();
        if pending.is_empty() {
            println!("\nNo pending appointments");
            return;
        }

        println!("\n--- Mark Appointment Done ---");
        for (i, apt) in pending.iter().enumerate() {
            println!("  {}. {} — {} on {}", i + 1, apt.patient_name, apt.service, apt.date);
        }

        let choice = self.get_int_input("Select appointment (0 to go back)", Some(0));
        if choice <= 0 || choice as usize > pending.len() {
            return;
        }

        let apt = &pending[choice as usize - 1];
        let id = apt.id.clone();
        let patient_name = apt.patient_name.clone();

        let result = if keep_record {
            self.store.mark_done(&id)
        } else {
            self.store.remove(&id)
        };

        match result {
            Ok(true) => println!("\nAppointment for {} marked done", patient_name),
            Ok(false) => println!("\nAppointment not found"),
            Err(e) => println!("\nCould not update the appointment: {}", e),
        }
    }

    fn anonymous_menu(&mut self) {
        println!("\n--- Welcome ---");
        println!("1. Sign in");
        println!("2. View services");
        println!("3. Exit");

        match self.get_int_input("Enter choice", Some(1)) {
            1 => self.sign_in(),
            2 => {
                println!("\nOur services:");
                for service in Service::all() {
                    println!("  - {}", service);
                }
            }
            3 => {
                self.running = false;
                println!("\nGoodbye!");
            }
            _ => println!("Invalid choice"),
        }
    }

    fn patient_menu(&mut self) {
        println!("\n--- Patient Menu ---");
        println!("1. Book an appointment");
        println!("2. Log out");

        match self.get_int_input("Enter choice", Some(1)) {
            1 => self.book_appointment(),
            2 => {
                self.session.logout();
                println!("\nLogged out");
            }
            _ => println!("Invalid choice"),
        }
    }

    fn staff_menu(&mut self) {
        println!("\n--- Staff Menu ({} pending) ---", self.store.pending_count());
        println!("1. View dashboard");
        println!("2. Mark appointment done (remove)");
        println!("3. Mark appointment done (keep record)");
        println!("4. Log out");

        match self.get_int_input("Enter choice", Some(1)) {
            1 => self.view_dashboard(),
            2 => self.complete_appointment(false),
            3 => self.complete_appointment(true),
            4 => {
                self.session.logout();
                println!("\nLogged out");
            }
            _ => println!("Invalid choice"),
        }
    }

    fn run(&mut self) {
        self.print_header();

        while self.running {
            match self.session.role() {
                Role::Anonymous => self.anonymous_menu(),
                Role::Patient => self.patient_menu(),
                Role::Staff => self.staff_menu(),
            }
        }
    }
}

fn format_created_at(appointment: &Appointment) -> String {
    match Local.timestamp_millis_opt(appointment.created_at).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => appointment.created_at.to_string(),
    }
}

fn main() {
    let config = Config::from_env();

    let store = match AppointmentStore::open(&config.data_file) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "Could not open appointment data at {}: {}",
                config.data_file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let mut cli = BookingCli::new(Session::new(), store);
    cli.run();
}

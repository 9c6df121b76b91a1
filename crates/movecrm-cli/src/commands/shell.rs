//! Interactive shell: sign in, then switch between the dashboard,
//! customers, and jobs tabs.

use chrono::Local;
use dialoguer::{Confirm, Input, Password, Select};

use movecrm_auth::{AuthGate, SignedIn};
use movecrm_core::error::{AppError, ErrorKind};
use movecrm_entity::{JobSize, JobStatus, MovingJob};
use movecrm_service::{CrmServices, CustomerBoard, DashboardBoard, JobBoard, RequestContext};

use super::dashboard::print_snapshot;
use super::input_error;
use super::rows::{CustomerRow, JobRow};
use crate::output;

const MAX_SIGN_IN_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Dashboard,
    Customers,
    Jobs,
    SignOut,
}

impl Tab {
    const ALL: [Tab; 4] = [Self::Dashboard, Self::Customers, Self::Jobs, Self::SignOut];

    fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Customers => "Customers",
            Self::Jobs => "Jobs",
            Self::SignOut => "Sign out",
        }
    }
}

/// Why the tab loop ended.
enum Exit {
    SignedOut,
    Expired,
}

/// Execute the shell command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (stores, services) = super::open_services(&config).await?;
    let gate = AuthGate::new(&config.auth);

    let result = run(&gate, &services).await;
    stores.close().await;
    result
}

async fn run(gate: &AuthGate, services: &CrmServices) -> Result<(), AppError> {
    loop {
        let Some(signed_in) = sign_in(gate)? else {
            return Ok(());
        };

        match session(gate, services, &signed_in).await? {
            Exit::SignedOut => {
                gate.sign_out(&signed_in.identity);
                output::print_success("Signed out");
                return Ok(());
            }
            Exit::Expired => output::print_warning("Your session has expired; please sign in again"),
        }
    }
}

/// Prompt for credentials. `None` after too many failed attempts.
fn sign_in(gate: &AuthGate) -> Result<Option<SignedIn>, AppError> {
    output::print_heading("MoveCRM sign in");
    for _ in 0..MAX_SIGN_IN_ATTEMPTS {
        let username: String = Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(input_error)?;
        let password = Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(input_error)?;

        match gate.sign_in(&username, &password) {
            Ok(signed_in) => return Ok(Some(signed_in)),
            Err(e) if e.kind == ErrorKind::Authentication => output::print_error(&e.message),
            Err(e) => return Err(e),
        }
    }
    output::print_error("Too many failed sign-in attempts");
    Ok(None)
}

async fn session(
    gate: &AuthGate,
    services: &CrmServices,
    signed_in: &SignedIn,
) -> Result<Exit, AppError> {
    println!();
    println!("{}", signed_in.identity.greeting());

    let ctx = RequestContext::for_staff(&signed_in.identity);
    let (mut dashboard, mut customers, mut jobs) = services.boards();
    let labels: Vec<&str> = Tab::ALL.iter().map(|t| t.label()).collect();

    loop {
        let choice = Select::new()
            .with_prompt("Tab")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let tab = Tab::ALL[choice];
        if tab == Tab::SignOut {
            return Ok(Exit::SignedOut);
        }
        if gate.authenticate(&signed_in.access_token).is_err() {
            return Ok(Exit::Expired);
        }

        match tab {
            Tab::Dashboard => dashboard_tab(&mut dashboard).await,
            Tab::Customers => customers_tab(&mut customers, &ctx).await?,
            Tab::Jobs => jobs_tab(&mut jobs, &ctx).await?,
            Tab::SignOut => {}
        }
    }
}

fn choose(prompt: &str, items: &[String]) -> Result<usize, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(input_error)
}

fn text(prompt: &str, initial: &str, optional: bool) -> Result<String, AppError> {
    Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(optional)
        .interact_text()
        .map_err(input_error)
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(input_error)
}

// ── Dashboard ───────────────────────────────────────────────────

async fn dashboard_tab(board: &mut DashboardBoard) {
    board.show().await;
    match board.snapshot() {
        Some(snapshot) => print_snapshot(snapshot),
        None => output::print_warning("Dashboard data is unavailable right now"),
    }
}

// ── Customers ───────────────────────────────────────────────────

async fn customers_tab(board: &mut CustomerBoard, ctx: &RequestContext) -> Result<(), AppError> {
    let actions = [
        "Add customer".to_string(),
        "Delete customer".to_string(),
        "Refresh".to_string(),
        "Back".to_string(),
    ];

    loop {
        board.show().await;
        output::print_heading("Customers");
        let rows: Vec<CustomerRow> = board.customers().iter().map(CustomerRow::from).collect();
        output::print_table(&rows);

        match choose("Action", &actions)? {
            0 => add_customer(board, ctx).await?,
            1 => delete_customer(board, ctx).await?,
            2 => board.refresh().await,
            _ => return Ok(()),
        }
    }
}

async fn add_customer(board: &mut CustomerBoard, ctx: &RequestContext) -> Result<(), AppError> {
    if !board.is_form_open() {
        board.toggle_form();
    }

    let form = board.form().clone();
    let name = text("Name", &form.name, false)?;
    let email = text("Email", &form.email, false)?;
    let phone = text("Phone", &form.phone, false)?;
    let address = text("Address", &form.address, true)?;
    let notes = text("Notes", &form.notes, true)?;

    let form = board.form_mut();
    form.name = name;
    form.email = email;
    form.phone = phone;
    form.address = address;
    form.notes = notes;

    if !confirm("Save customer?")? {
        board.toggle_form();
        return Ok(());
    }

    if let Err(e) = board.form().clone().into_draft() {
        output::print_error(&e.message);
        return Ok(());
    }

    if board.submit(ctx).await {
        output::print_success("Customer added");
    } else {
        output::print_error("Could not save the customer; your input is kept in the form");
    }
    Ok(())
}

async fn delete_customer(board: &mut CustomerBoard, ctx: &RequestContext) -> Result<(), AppError> {
    if board.customers().is_empty() {
        output::print_warning("There are no customers to delete");
        return Ok(());
    }

    let mut items: Vec<String> = board
        .customers()
        .iter()
        .map(|c| format!("{} <{}>", c.name, c.email))
        .collect();
    items.push("Cancel".to_string());

    let index = choose("Customer", &items)?;
    let Some(customer) = board.customers().get(index) else {
        return Ok(());
    };
    let (id, name) = (customer.id, customer.name.clone());

    if board.delete(ctx, id).await {
        output::print_success(&format!("Deleted {name}"));
    } else {
        output::print_error("Could not delete the customer");
    }
    Ok(())
}

// ── Jobs ────────────────────────────────────────────────────────

fn job_label(board: &JobBoard, job: &MovingJob) -> String {
    format!(
        "{}  {}  {} → {}  [{}]",
        job.scheduled_day(),
        board.customer_name(job.customer_id),
        job.current_address,
        job.destination_address,
        job.status.map(|s| s.label()).unwrap_or("Unknown"),
    )
}

async fn jobs_tab(board: &mut JobBoard, ctx: &RequestContext) -> Result<(), AppError> {
    let actions = [
        "Add job".to_string(),
        "Change status".to_string(),
        "Delete job".to_string(),
        "Refresh".to_string(),
        "Back".to_string(),
    ];

    loop {
        board.show().await;
        output::print_heading("Moving jobs");
        let rows: Vec<JobRow> = board
            .jobs()
            .iter()
            .map(|j| JobRow::new(j, board.customer_name(j.customer_id)))
            .collect();
        output::print_table(&rows);

        match choose("Action", &actions)? {
            0 => add_job(board, ctx).await?,
            1 => change_status(board, ctx).await?,
            2 => delete_job(board, ctx).await?,
            3 => board.refresh().await,
            _ => return Ok(()),
        }
    }
}

fn select_job(board: &JobBoard) -> Result<Option<usize>, AppError> {
    if board.jobs().is_empty() {
        output::print_warning("There are no jobs yet");
        return Ok(None);
    }
    let mut items: Vec<String> = board.jobs().iter().map(|j| job_label(board, j)).collect();
    items.push("Cancel".to_string());
    let index = choose("Job", &items)?;
    Ok((index < board.jobs().len()).then_some(index))
}

fn select_status(prompt: &str, current: Option<JobStatus>) -> Result<JobStatus, AppError> {
    let items: Vec<String> = JobStatus::ALL.iter().map(|s| s.label().to_string()).collect();
    let default = current
        .and_then(|c| JobStatus::ALL.iter().position(|s| *s == c))
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()
        .map_err(input_error)?;
    Ok(JobStatus::ALL[index])
}

fn select_size(current: Option<JobSize>) -> Result<JobSize, AppError> {
    let items: Vec<String> = JobSize::ALL.iter().map(|s| s.as_str().to_string()).collect();
    let default = current
        .and_then(|c| JobSize::ALL.iter().position(|s| *s == c))
        .unwrap_or(1);
    let index = Select::new()
        .with_prompt("Size")
        .items(&items)
        .default(default)
        .interact()
        .map_err(input_error)?;
    Ok(JobSize::ALL[index])
}

async fn add_job(board: &mut JobBoard, ctx: &RequestContext) -> Result<(), AppError> {
    if board.customers().is_empty() {
        output::print_warning("Add a customer before scheduling a job");
        return Ok(());
    }
    if !board.is_form_open() {
        board.toggle_form();
    }

    let form = board.form().clone();

    let names: Vec<String> = board
        .customers()
        .iter()
        .map(|c| format!("{} <{}>", c.name, c.email))
        .collect();
    let customer_index = choose("Customer", &names)?;
    let customer_id = board
        .customers()
        .get(customer_index)
        .map(|c| c.id.to_string())
        .unwrap_or_default();

    let current_address = text("Current address", &form.current_address, false)?;
    let destination_address = text("Destination address", &form.destination_address, false)?;
    let initial_date = if form.scheduled_date.is_empty() {
        Local::now().date_naive().to_string()
    } else {
        form.scheduled_date.clone()
    };
    let scheduled_date = text("Move date (YYYY-MM-DD)", &initial_date, false)?;
    let status = select_status("Status", form.status.parse().ok())?;
    let job_size = select_size(form.job_size.parse().ok())?;
    let special_items = text("Special items", &form.special_items, true)?;
    let estimated_cost = text("Estimated cost", &form.estimated_cost, true)?;
    let actual_cost = text("Actual cost", &form.actual_cost, true)?;
    let notes = text("Notes", &form.notes, true)?;

    let form = board.form_mut();
    form.customer_id = customer_id;
    form.current_address = current_address;
    form.destination_address = destination_address;
    form.scheduled_date = scheduled_date;
    form.status = status.as_str().to_string();
    form.job_size = job_size.as_str().to_string();
    form.special_items = special_items;
    form.estimated_cost = estimated_cost;
    form.actual_cost = actual_cost;
    form.notes = notes;

    if !confirm("Save job?")? {
        board.toggle_form();
        return Ok(());
    }

    if let Err(e) = board.form().into_draft() {
        output::print_error(&e.to_string());
        return Ok(());
    }

    if board.submit(ctx).await {
        output::print_success("Job scheduled");
    } else {
        output::print_error("Could not save the job; your input is kept in the form");
    }
    Ok(())
}

async fn change_status(board: &mut JobBoard, ctx: &RequestContext) -> Result<(), AppError> {
    let Some(index) = select_job(board)? else {
        return Ok(());
    };
    let job = &board.jobs()[index];
    let (id, current) = (job.id, job.status);

    let status = select_status("New status", current)?;
    if board.change_status(ctx, id, status).await {
        output::print_success(&format!("Status set to {}", status.label()));
    } else {
        output::print_error("Could not update the job status");
    }
    Ok(())
}

async fn delete_job(board: &mut JobBoard, ctx: &RequestContext) -> Result<(), AppError> {
    let Some(index) = select_job(board)? else {
        return Ok(());
    };
    let id = board.jobs()[index].id;

    if board.delete(ctx, id).await {
        output::print_success("Job deleted");
    } else {
        output::print_error("Could not delete the job");
    }
    Ok(())
}

//! Command-line front end for the RK Valley voting demo.
//! Everything it shows comes from the seeded, read-only repository; votes,
//! logins and complaints last only as long as the process.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info};

use rkv_voting::{
    logging,
    model::{
        election::{Candidate, Election, ElectionStatus},
        forms::{ComplaintForm, LoginForm},
        region::Region,
        results::{self, Outcome},
        session::VotingSession,
    },
    submission::Submitter,
    Config, Repository,
};

const PROGRAM_NAME: &str = "rkv-voting";

const ABOUT_TEXT: &str = "Browse elections, candidates and results, and cast a demo vote.

EXIT CODES:
     0: Success.
   255: Ran successfully, but the request was rejected.
 Other: Error.";

const SUCCESS: u8 = 0;
const ERROR: u8 = 1;
const REJECTED: u8 = 255;

const ELECTION: &str = "ELECTION";
const STATE: &str = "STATE";
const DISTRICT: &str = "DISTRICT";
const MANDAL: &str = "MANDAL";
const CANDIDATE: &str = "CANDIDATE";
const STATUS: &str = "STATUS";
const NAME: &str = "NAME";
const EMAIL: &str = "EMAIL";
const AADHAAR: &str = "AADHAAR";
const PHONE: &str = "PHONE";
const TYPE: &str = "TYPE";
const DETAILS: &str = "DETAILS";
const ATTACHMENT: &str = "ATTACHMENT";

/// Everything a command needs, built once at start-up.
struct App {
    repo: Repository,
    submitter: Submitter,
}

impl App {
    fn from_config(config: &Config) -> rkv_voting::Result<Self> {
        Ok(Self {
            repo: Repository::from_config(config)?,
            submitter: Submitter::from_config(config),
        })
    }
}

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("regions")
                .about("List states, the districts of a state, or the mandals of a district")
                .arg(
                    Arg::new(STATE)
                        .long("state")
                        .help("State ID, e.g. ap")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new(DISTRICT)
                        .long("district")
                        .help("District ID within the state, e.g. kadapa")
                        .action(ArgAction::Set)
                        .requires(STATE),
                ),
        )
        .subcommand(
            Command::new("elections")
                .about("List elections, optionally only those with the given status")
                .arg(
                    Arg::new(STATUS)
                        .long("status")
                        .help("One of current, past, future")
                        .action(ArgAction::Set)
                        .value_parser(clap::value_parser!(ElectionStatus)),
                ),
        )
        .subcommand(
            region_args(Command::new("candidates"))
                .about("Show the candidates standing in a region"),
        )
        .subcommand(
            region_args(Command::new("results"))
                .about("Rank the candidates of a region and name the winner"),
        )
        .subcommand(
            region_args(Command::new("vote"))
                .about("Open a voting session and cast each listed vote in turn")
                .arg(
                    Arg::new(CANDIDATE)
                        .help("Candidate ID; only the first vote of the session counts")
                        .action(ArgAction::Append)
                        .num_args(1..)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Check the login form and simulate signing in")
                .arg(text_arg(NAME, "name", "Full name"))
                .arg(text_arg(EMAIL, "email", "Email address"))
                .arg(text_arg(AADHAAR, "aadhaar", "12-digit Aadhaar number"))
                .arg(text_arg(PHONE, "phone", "10-digit phone number")),
        )
        .subcommand(
            Command::new("complain")
                .about("Check the complaint form and simulate filing it")
                .arg(text_arg(NAME, "name", "Full name"))
                .arg(text_arg(PHONE, "phone", "10-digit phone number"))
                .arg(text_arg(EMAIL, "email", "Email address (optional)"))
                .arg(text_arg(TYPE, "type", "Complaint type, e.g. \"EVM Malfunction\""))
                .arg(text_arg(ELECTION, "election", "Election the complaint concerns (optional)"))
                .arg(text_arg(DETAILS, "details", "What happened"))
                .arg(
                    Arg::new(ATTACHMENT)
                        .long("attachment")
                        .help("Name of a supporting file (optional)")
                        .action(ArgAction::Set),
                ),
        )
}

/// The election + region positionals shared by several commands.
fn region_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ELECTION)
                .help("Election ID, e.g. election-1")
                .required(true),
        )
        .arg(Arg::new(STATE).help("State ID, e.g. ap").required(true))
        .arg(
            Arg::new(DISTRICT)
                .help("District ID, e.g. kadapa")
                .required(true),
        )
        .arg(
            Arg::new(MANDAL)
                .help("Mandal ID, e.g. kadapa-mandal")
                .required(true),
        )
}

/// A form field; left empty when not given so the form reports it.
fn text_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .help(help)
        .action(ArgAction::Set)
        .default_value("")
}

fn string_arg(args: &ArgMatches, id: &str) -> String {
    args.get_one::<String>(id).cloned().unwrap_or_default()
}

fn region_of(args: &ArgMatches) -> Region {
    Region::new(
        string_arg(args, STATE),
        string_arg(args, DISTRICT),
        string_arg(args, MANDAL),
    )
}

fn find_election<'a>(args: &ArgMatches, app: &'a App) -> Option<&'a Election> {
    let election_id = string_arg(args, ELECTION);
    let election = app.repo.elections().by_id(&election_id);
    if election.is_none() {
        println!("Unknown election {election_id}");
    }
    election
}

fn region_candidates<'a>(election: &'a Election, region: &Region) -> Vec<&'a Candidate> {
    election.candidates_in_region(&region.state_id, &region.district_id, &region.mandal_id)
}

fn print_candidate(candidate: &Candidate, votes: Option<u64>) {
    print!(
        "{} | {} | {}, age {} | {}",
        candidate.id, candidate.name, candidate.party, candidate.age, candidate.qualification
    );
    match votes {
        Some(votes) => println!(" | {votes} vote{}", if votes != 1 { "s" } else { "" }),
        None => println!(),
    }
}

fn regions(args: &ArgMatches, app: &App) -> u8 {
    let catalog = app.repo.regions();
    match (
        args.get_one::<String>(STATE),
        args.get_one::<String>(DISTRICT),
    ) {
        (None, _) => {
            for state in catalog.states() {
                println!("{}: {}", state.id, state.name);
            }
        }
        (Some(state_id), None) => {
            let districts = catalog.districts(state_id);
            if districts.is_empty() {
                println!("No districts found for state {state_id}");
                return ERROR;
            }
            println!("{}", catalog.state_name(state_id));
            for district in districts {
                println!("{}: {}", district.id, district.name);
            }
        }
        (Some(state_id), Some(district_id)) => {
            let mandals = catalog.mandals(state_id, district_id);
            if mandals.is_empty() {
                println!("No mandals found for district {state_id}/{district_id}");
                return ERROR;
            }
            println!(
                "{} > {}",
                catalog.state_name(state_id),
                catalog.district_name(state_id, district_id)
            );
            for mandal in mandals {
                println!("{}: {}", mandal.id, mandal.name);
            }
        }
    }
    SUCCESS
}

fn elections(args: &ArgMatches, app: &App) -> u8 {
    let catalog = app.repo.elections();
    let elections: Vec<&Election> = match args.get_one::<ElectionStatus>(STATUS) {
        Some(status) => catalog.by_status(*status),
        None => catalog.all().iter().collect(),
    };
    if elections.is_empty() {
        println!("No elections found.");
    }
    for election in elections {
        println!(
            "{} [{}] {} ({}, {} to {}), {} candidate{}",
            election.id,
            election.status,
            election.title,
            election.kind,
            election.start_date.format("%Y-%m-%d %H:%M UTC"),
            election.end_date.format("%Y-%m-%d %H:%M UTC"),
            election.candidates.len(),
            if election.candidates.len() != 1 { "s" } else { "" },
        );
    }
    SUCCESS
}

fn candidates(args: &ArgMatches, app: &App) -> u8 {
    let Some(election) = find_election(args, app) else {
        return ERROR;
    };
    let region = region_of(args);
    println!("{}", election.title);
    println!("{}", app.repo.regions().describe(&region));

    let found = region_candidates(election, &region);
    if found.is_empty() {
        println!("No candidates found for this region.");
        return SUCCESS;
    }
    // Tallies are only public once an election is over.
    let show_votes = election.status == ElectionStatus::Past;
    for candidate in found {
        print_candidate(candidate, show_votes.then_some(candidate.votes));
    }
    SUCCESS
}

fn show_results(args: &ArgMatches, app: &App) -> u8 {
    let Some(election) = find_election(args, app) else {
        return ERROR;
    };
    let region = region_of(args);
    println!("{}", election.title);
    println!("{}", app.repo.regions().describe(&region));

    let found = region_candidates(election, &region);
    if found.is_empty() {
        println!("No candidates found for this region.");
        return SUCCESS;
    }
    for (rank, candidate) in results::ranked_by_votes(found.iter().copied())
        .into_iter()
        .enumerate()
    {
        print!("{}. ", rank + 1);
        print_candidate(candidate, Some(candidate.votes));
    }
    match results::outcome(found) {
        Outcome::Winner(candidate) => println!("Winner: {} ({})", candidate.name, candidate.party),
        Outcome::Tie(leaders) => {
            let names: Vec<&str> = leaders.iter().map(|c| c.name.as_str()).collect();
            println!("Tie between: {}", names.join(", "));
        }
        Outcome::NoCandidates => {}
    }
    SUCCESS
}

fn vote(args: &ArgMatches, app: &App) -> u8 {
    let Some(election) = find_election(args, app) else {
        return ERROR;
    };
    let mut session = match VotingSession::open(election) {
        Ok(session) => session,
        Err(err) => {
            println!("{err}");
            return REJECTED;
        }
    };

    let region = region_of(args);
    let found = region_candidates(election, &region);
    if found.is_empty() {
        println!("No candidates found for this region.");
        return ERROR;
    }
    let choices: Vec<&String> = args
        .get_many::<String>(CANDIDATE)
        .map(|values| values.collect())
        .unwrap_or_default();
    for choice in &choices {
        if !found.iter().any(|c| &c.id == *choice) {
            println!(
                "Candidate {choice} is not standing in {}",
                app.repo.regions().describe(&region)
            );
            return ERROR;
        }
    }

    let mut code = SUCCESS;
    for choice in choices {
        match session.cast_vote(choice.as_str()) {
            Ok(()) => {
                println!("Vote cast successfully. Your vote has been recorded. Thank you for participating!")
            }
            Err(err) => {
                println!("Already voted: {err}");
                code = REJECTED;
            }
        }
    }
    for candidate in &found {
        let voted = session.voted_candidate_id() == Some(candidate.id.as_str());
        print!("{}", if voted { "* " } else { "  " });
        print_candidate(candidate, Some(session.tally_for(candidate)));
    }
    session.end();
    code
}

fn login(args: &ArgMatches, app: &App) -> u8 {
    let form = LoginForm {
        name: string_arg(args, NAME),
        email: string_arg(args, EMAIL),
        aadhaar: string_arg(args, AADHAAR),
        phone: string_arg(args, PHONE),
    };
    match form.validate() {
        Ok(login) => {
            let ack = app.submitter.submit_login(&login);
            println!(
                "Login successful. Welcome to the RGUKT RK Valley Voting System, {} (reference {}).",
                login.name, ack.reference
            );
            SUCCESS
        }
        Err(err) => {
            println!("Validation error: {err}");
            REJECTED
        }
    }
}

fn complain(args: &ArgMatches, app: &App) -> u8 {
    let form = ComplaintForm {
        name: string_arg(args, NAME),
        phone: string_arg(args, PHONE),
        email: string_arg(args, EMAIL),
        complaint_type: string_arg(args, TYPE),
        election_id: string_arg(args, ELECTION),
        details: string_arg(args, DETAILS),
        attachment: args.get_one::<String>(ATTACHMENT).cloned(),
    };
    match form.validate() {
        Ok(complaint) => {
            let ack = app.submitter.submit_complaint(&complaint);
            println!(
                "Complaint submitted. Your {} complaint has been registered with reference {}.",
                complaint.complaint_type, ack.reference
            );
            SUCCESS
        }
        Err(err) => {
            println!("Validation error: {err}");
            REJECTED
        }
    }
}

/// Run the chosen command, report the result, and return the exit code.
fn run(args: &ArgMatches, app: &App) -> u8 {
    match args.subcommand() {
        Some(("regions", sub)) => regions(sub, app),
        Some(("elections", sub)) => elections(sub, app),
        Some(("candidates", sub)) => candidates(sub, app),
        Some(("results", sub)) => show_results(sub, app),
        Some(("vote", sub)) => vote(sub, app),
        Some(("login", sub)) => login(sub, app),
        Some(("complain", sub)) => complain(sub, app),
        _ => {
            println!("No command given");
            ERROR
        }
    }
}

fn main() {
    let args = cli().get_matches();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(ERROR.into())
        }
    };
    if let Err(err) = logging::init(&config) {
        eprintln!("{err}");
        std::process::exit(ERROR.into())
    }

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(err) => {
            error!("{err}");
            error!("Critical failure, shutting down");
            std::process::exit(ERROR.into())
        }
    };
    info!("Repository ready");

    let exit_code = run(&args, &app);
    std::process::exit(exit_code.into())
}

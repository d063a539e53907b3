//! Demo runtime and entry point.
//!
//! Parses `key=value` arguments into a [`Config`], installs tracing, founds a
//! company and walks it through a scripted session: hiring the reference
//! staff, looking people up, promoting and demoting, and finally handing the
//! presidency to the succession candidate.
//!
//! ```text
//! args → Config → initialize → AppState
//!                                  │
//!        script: [Command] ──▶ handle_command ──▶ [Action] ──▶ stdout
//! ```
//!
//! Roster notices are printed by the console sink as they happen; the actions
//! returned by the handler cover lookups, introductions and the roster table.

use company_roster::app::{handle_command, Action, AppState, Command};
use company_roster::domain::{Gender, Profile, Rank};
use company_roster::{initialize, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("company-roster: {e}");
            eprintln!("usage: company-roster [trace_level=..] [theme=..] [theme_file=..] [journal=..] [color=..]");
            return ExitCode::FAILURE;
        }
    };

    company_roster::observability::init_tracing(&config);
    let span = tracing::debug_span!("session");
    let _guard = span.entered();
    tracing::debug!(?config, "parsed configuration");

    let mut state = initialize(&config, Profile::new("倍井 杉蔵", Gender::Male, 88));
    for command in script() {
        for action in handle_command(&mut state, &command) {
            execute(&state, action);
        }
    }

    tracing::debug!(
        presidents = state.former_presidents.len() + 1,
        roster = state.company.borrow().current_size(),
        "session complete"
    );
    ExitCode::SUCCESS
}

fn execute(state: &AppState, action: Action) {
    match action {
        Action::Print(line) => println!("{line}"),
        Action::RenderRoster => print!("{}", state.roster_view()),
    }
}

fn script() -> Vec<Command> {
    vec![
        Command::hire("佐藤 太郎", Gender::Male, 22, Rank::Junior),
        Command::hire("鈴木 二郎", Gender::Male, 44, Rank::Executive),
        Command::hire("高橋 三郎", Gender::Male, 33, Rank::Lead),
        Command::hire("田中 しょうこ", Gender::Female, 42, Rank::Manager),
        Command::hire("渡辺中小路 五郎左衛門", Gender::Male, 60, Rank::Junior),
        Command::hire("篠崎 六郎", Gender::Other, 18, Rank::Lead),
        Command::hire("那奈南波 菜々美", Gender::Female, 19, Rank::Junior),
        Command::hire("周 八郎", Gender::Male, 21, Rank::Executive),
        Command::ShowRoster,
        Command::IntroducePresident,
        Command::Lookup {
            name: "高橋 三郎".into(),
        },
        Command::Introduce {
            name: "田中 しょうこ".into(),
        },
        Command::Promote {
            name: "佐藤 太郎".into(),
        },
        Command::Promote {
            name: "鈴木 二郎".into(),
        },
        Command::Demote {
            name: "那奈南波 菜々美".into(),
        },
        Command::ShowCandidate,
        Command::Resign,
        Command::DismissEarliestHire,
        Command::ShowRoster,
    ]
}

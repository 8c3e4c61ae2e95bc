mod cli;

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use clap::Parser;
use rollcall::config::AppConfig;
use rollcall::core::{
    AutoConfirm, Command, Confirm, Dispatcher, Outcome, Tab, TeamFilter, event_status_intent,
    team_filter_options,
};
use rollcall::logging::init_logging;
use rollcall::surface::{ConsoleNotifier, StdinConfirm, TextSurface};
use rollcall_client::FileSessionStore;
use shared::intent::{CrudAction, EntityIntent};
use shared::models::{EventCreate, MemberCreate, MemberUpdate, TeamCreate};

use cli::{Cli, Commands};

type App = Dispatcher<TextSurface>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }
    let _guard = init_logging(config.log_dir.as_deref(), cli.verbose)?;
    tracing::debug!(
        api_url = %config.api_url,
        session = %config.session_file.display(),
        "Starting"
    );

    let api = config
        .client_config()
        .build_http_client()
        .context("Failed to build HTTP client")?;
    let confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(StdinConfirm)
    };
    let mut app = Dispatcher::new(
        Box::new(api),
        Box::new(FileSessionStore::new(&config.session_file)),
        Box::new(ConsoleNotifier),
        confirm,
        TextSurface::new(),
    )
    .with_debounce(config.debounce);

    app.start().await;
    run(&mut app, cli.command).await
}

async fn run(app: &mut App, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => read_password()?,
            };
            expect_applied(app.dispatch(Command::Login { username, password }).await?)?;
        }
        Commands::Logout => {
            app.dispatch(Command::Logout).await?;
            println!("Logged out");
        }
        Commands::Whoami => {
            require_login(app)?;
            let user = app.current_user().await?;
            println!(
                "{} ({}){}",
                user.display_name(),
                user.username,
                user.role.as_ref().map(|r| format!(", {r}")).unwrap_or_default()
            );
        }
        Commands::Leaderboard { expand } => {
            if app.state().is_logged_in() {
                app.dispatch(Command::SelectTab(Tab::Leaderboard)).await?;
            }
            if let Some(id) = expand {
                app.dispatch(Command::ToggleLeaderboardExpand(id)).await?;
            }
            print!("{}", app.surface().render());
        }
        Commands::Members { search, team, expand } => {
            require_login(app)?;
            app.dispatch(Command::SelectTab(Tab::Members)).await?;
            apply_filter(app, search, team).await?;
            if let Some(id) = expand {
                app.dispatch(Command::ToggleMemberExpand(id)).await?;
            }
            print_team_options(app);
            print!("{}", app.surface().render());
        }
        Commands::Teams => {
            require_login(app)?;
            app.dispatch(Command::SelectTab(Tab::Teams)).await?;
            print!("{}", app.surface().render());
        }
        Commands::Events => {
            require_login(app)?;
            app.dispatch(Command::SelectTab(Tab::Events)).await?;
            print!("{}", app.surface().render());
        }
        Commands::Records { member } => {
            require_login(app)?;
            let records = app
                .state()
                .records
                .iter()
                .filter(|r| member.as_deref().is_none_or(|m| r.member_id == m));
            for record in records {
                println!(
                    "{}  {:<16} {:<20} +{:<5} [{}]",
                    record.checked_in_display(),
                    record.member_name.as_deref().unwrap_or(&record.member_id),
                    record.event_name.as_deref().unwrap_or("(deleted event)"),
                    rollcall::core::fmt_points(record.points_awarded),
                    record.id
                );
            }
        }
        Commands::CheckIn {
            event,
            members,
            all_visible,
            search,
            team,
        } => {
            require_login(app)?;
            app.dispatch(Command::SelectTab(Tab::CheckIn)).await?;
            expect_applied(app.dispatch(Command::SelectEvent(Some(event))).await?)?;
            for id in members {
                expect_applied(app.dispatch(Command::ToggleMember(id)).await?)?;
            }
            if all_visible {
                apply_filter(app, search, team).await?;
                app.dispatch(Command::ToggleSelectAll).await?;
            }
            print!("{}", app.surface().render());
            expect_applied(app.dispatch(Command::CheckIn).await?)?;
        }
        Commands::AddMember { name, team } => {
            let intent = EntityIntent::Member(CrudAction::Create(MemberCreate { name, team }));
            expect_applied(app.dispatch(Command::Entity(intent)).await?)?;
        }
        Commands::EditMember { id, name, team } => {
            require_login(app)?;
            let Some(current) = app.state().member(&id) else {
                bail!("Unknown member: {id}");
            };
            let data = MemberUpdate {
                name: name.unwrap_or_else(|| current.name.clone()),
                team: match team {
                    Some(team) => Some(team),
                    None => current.team.clone(),
                },
            };
            let intent = EntityIntent::Member(CrudAction::Update { id, data });
            expect_applied(app.dispatch(Command::Entity(intent)).await?)?;
        }
        Commands::DeleteMember { id } => {
            let intent = EntityIntent::Member(CrudAction::Delete { id });
            expect_applied(app.dispatch(Command::Entity(intent)).await?)?;
        }
        Commands::ClearPoints { id } => {
            expect_applied(app.dispatch(Command::ClearMemberPoints(id)).await?)?;
        }
        Commands::AddTeam { name, description } => {
            let intent = EntityIntent::Team(CrudAction::Create(TeamCreate { name, description }));
            expect_applied(app.dispatch(Command::Entity(intent)).await?)?;
        }
        Commands::DeleteTeam { id } => {
            let intent = EntityIntent::Team(CrudAction::Delete { id });
            expect_applied(app.dispatch(Command::Entity(intent)).await?)?;
        }
        Commands::AddEvent { name, date, points } => {
            let data = EventCreate { name, points, date };
            let intent = EntityIntent::Event(CrudAction::Create(data));
            expect_applied(app.dispatch(Command::Entity(intent)).await?)?;
        }
        Commands::SetEventStatus { id, status } => {
            let intent = event_status_intent(id, status);
            expect_applied(app.dispatch(Command::Entity(intent)).await?)?;
        }
        Commands::DeleteEvent { id } => {
            let intent = EntityIntent::Event(CrudAction::Delete { id });
            expect_applied(app.dispatch(Command::Entity(intent)).await?)?;
        }
        Commands::DeleteRecord { id } => {
            expect_applied(app.dispatch(Command::DeleteRecord(id)).await?)?;
        }
        Commands::ResetPoints => {
            expect_applied(app.dispatch(Command::ResetAllPoints).await?)?;
        }
        Commands::ResetAll => {
            expect_applied(app.dispatch(Command::ResetAllData).await?)?;
        }
    }
    Ok(())
}

/// Apply search and team filters, then recompute without waiting for the
/// debounce window
async fn apply_filter(
    app: &mut App,
    search: Option<String>,
    team: Option<String>,
) -> anyhow::Result<()> {
    if let Some(team) = team {
        app.dispatch(Command::SetTeamFilter(TeamFilter::from(team))).await?;
    }
    if let Some(search) = search {
        app.dispatch(Command::SearchInput(search)).await?;
        app.refresh();
    }
    Ok(())
}

/// Team filter choices, the active one starred
fn print_team_options(app: &App) {
    let state = app.state();
    let options: Vec<String> = team_filter_options(&state.teams, &state.members)
        .iter()
        .map(|team| {
            if *team == state.filter.team {
                format!("{team}*")
            } else {
                team.to_string()
            }
        })
        .collect();
    println!("Team filter: {}", options.join(" | "));
}

fn require_login(app: &App) -> anyhow::Result<()> {
    if !app.state().is_logged_in() {
        bail!("Not logged in, run `rollcall login <username>` first");
    }
    Ok(())
}

fn expect_applied(outcome: Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::Applied | Outcome::Deferred => Ok(()),
        Outcome::Skipped(reason) => bail!("Nothing done: {reason}"),
        Outcome::Declined => {
            println!("Cancelled");
            Ok(())
        }
    }
}

fn read_password() -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Password: ")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

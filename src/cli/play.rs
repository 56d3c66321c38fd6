//! Play command implementation.

use super::CliError;
use super::output::{format_battle, format_map, format_menu, format_mission, format_mission_check};
use conquista::game::{
    Dice, DiceSource, Faction, GameConfig, GameSession, Mission, TERRITORY_COUNT, TerritoryId,
};
use std::io::{self, BufRead, Write};

/// How the interactive loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellExit {
    /// The player completed the mission.
    Won,
    /// The player quit or input ended.
    Quit,
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the mission id is unknown or the terminal fails.
pub(crate) fn execute(
    seed: Option<u64>,
    color: String,
    mission: Option<u32>,
) -> Result<(), CliError> {
    let mission = mission.map(parse_mission).transpose()?;

    let dice = seed.map_or_else(Dice::from_time, Dice::from_seed);
    log::info!("Starting game with seed {}", dice.seed());

    let config = GameConfig {
        player: Faction::new(color),
        mission,
    };
    let mut session = GameSession::new(config, dice);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit = run_shell(&mut session, stdin.lock(), stdout.lock())?;
    log::info!("Game over ({exit:?}) after {} rounds", session.rounds());

    Ok(())
}

/// Look up a mission id given on the command line.
///
/// # Errors
///
/// Returns an error if no mission has this id.
pub(crate) fn parse_mission(id: u32) -> Result<Mission, CliError> {
    Mission::from_id(id).ok_or_else(|| CliError::new(format!("Unknown mission id {id}")))
}

/// Drive a session from line-based input until the player wins or quits.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub(crate) fn run_shell<D: DiceSource>(
    session: &mut GameSession<D>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<ShellExit, CliError> {
    writeln!(out, "=== Conquista ===")?;
    writeln!(out, "You are the {} army.", session.player())?;

    loop {
        write!(out, "{}", format_map(session.store()))?;
        write!(out, "{}", format_mission(session.mission()))?;
        write!(out, "{}", format_menu())?;
        write!(out, "Your action (0-2): ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(out, "\nLeaving the game...")?;
            return Ok(ShellExit::Quit);
        };

        match line.trim().parse::<u32>() {
            Ok(1) => attack_phase(session, &mut input, &mut out)?,
            Ok(2) => {
                let progress = session.progress();
                write!(out, "{}", format_mission_check(session.mission(), &progress))?;
                if progress.complete {
                    return Ok(ShellExit::Won);
                }
            }
            Ok(0) => {
                writeln!(out, "\nLeaving the game...")?;
                return Ok(ShellExit::Quit);
            }
            _ => writeln!(out, "\nInvalid option. Try again.")?,
        }

        write!(out, "\nPress ENTER to continue...")?;
        out.flush()?;
        if read_line(&mut input)?.is_none() {
            writeln!(out)?;
            return Ok(ShellExit::Quit);
        }
    }
}

/// Prompt for an attack order and resolve it. Bad input aborts the round.
fn attack_phase<D: DiceSource>(
    session: &mut GameSession<D>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(out, "\n--- ATTACK PHASE ---")?;

    let Some(attacker) = prompt_id(input, out, "ATTACKING")? else {
        return Ok(());
    };
    let Some(defender) = prompt_id(input, out, "DEFENDING")? else {
        return Ok(());
    };

    match session.attack(attacker, defender) {
        Ok(report) => write!(out, "{}", format_battle(&report))?,
        Err(e) => writeln!(out, "\nERROR: {e}.")?,
    }

    Ok(())
}

fn prompt_id(
    input: &mut impl BufRead,
    out: &mut impl Write,
    role: &str,
) -> Result<Option<TerritoryId>, CliError> {
    write!(out, "{role} territory ID (1-{TERRITORY_COUNT}): ")?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    match line.trim().parse::<usize>() {
        Ok(id) => Ok(Some(TerritoryId::new(id))),
        Err(_) => {
            writeln!(out, "\nERROR: {:?} is not a territory ID.", line.trim())?;
            Ok(None)
        }
    }
}

/// Read one line; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use conquista::game::{LoadedDice, Territory, TerritoryStore};
    use std::io::Cursor;

    fn session(mission: Mission, dice: LoadedDice) -> GameSession<LoadedDice> {
        let store = TerritoryStore::from_territories([
            Territory::new("Alaska", "Vermelho", 3),
            Territory::new("Groelandia", "Azul", 4),
            Territory::new("Brasil", "Verde", 1),
            Territory::new("Africa do Sul", "Amarelo", 2),
            Territory::new("Siberia", "Vermelho", 2),
        ]);
        GameSession::with_store(store, mission, Faction::from("Azul"), dice)
    }

    fn run(session: &mut GameSession<LoadedDice>, input: &str) -> (ShellExit, String) {
        let mut out = Vec::new();
        let exit = run_shell(session, Cursor::new(input.to_string()), &mut out).unwrap();
        (exit, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let mut s = session(Mission::conquer_count(), LoadedDice::default());
        let (exit, text) = run(&mut s, "0\n");
        assert_eq!(exit, ShellExit::Quit);
        assert!(text.contains("You are the Azul army."));
        assert!(text.contains("Leaving the game"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut s = session(Mission::conquer_count(), LoadedDice::default());
        let (exit, _) = run(&mut s, "");
        assert_eq!(exit, ShellExit::Quit);
    }

    #[test]
    fn test_conquer_then_win_destroy_mission() {
        // Groelandia rolls 6 5 4 against Brasil's 1
        let mut s = session(Mission::destroy_faction(), LoadedDice::new([6, 5, 4, 1]));
        let (exit, text) = run(&mut s, "1\n2\n3\n\n2\n");
        assert_eq!(exit, ShellExit::Won);
        assert!(text.contains("CONQUEST!"));
        assert!(text.contains("VICTORY!"));
        assert_eq!(s.store().get(TerritoryId::new(3)).unwrap().owner, "Azul");
    }

    #[test]
    fn test_invalid_orders_change_nothing() {
        let mut s = session(Mission::conquer_count(), LoadedDice::default());
        let before = s.store().clone();
        // Not a number, own territory as attacker mismatch, same ids, bad menu option
        let (exit, text) = run(&mut s, "1\nabc\n\n1\n1\n3\n\n1\n2\n2\n\n7\n\n0\n");
        assert_eq!(exit, ShellExit::Quit);
        assert!(text.contains("is not a territory ID"));
        assert!(text.contains("is not yours"));
        assert!(text.contains("both territory 2"));
        assert!(text.contains("Invalid option"));
        assert_eq!(s.store(), &before);
        assert_eq!(s.rounds(), 0);
    }

    #[test]
    fn test_mission_check_reports_progress() {
        let mut s = session(Mission::conquer_count(), LoadedDice::default());
        let (_, text) = run(&mut s, "2\n\n0\n");
        assert!(text.contains("1/3 territories held"));
        assert!(text.contains("not complete"));
    }

    #[test]
    fn test_parse_mission_ids() {
        assert_eq!(parse_mission(1).unwrap(), Mission::destroy_faction());
        assert_eq!(parse_mission(2).unwrap(), Mission::conquer_count());
        let err = parse_mission(3).unwrap_err();
        assert!(err.to_string().contains("Unknown mission id 3"));
    }
}

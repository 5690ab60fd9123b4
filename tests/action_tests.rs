//! Action integration tests through the session.
//!
//! These tests look up who was dealt which role, then exercise each
//! action's phase gate, preconditions, and broadcasts.

use werwolf_engine::actions::{GameAction, WitchPotion};
use werwolf_engine::core::{GameConfig, GameError, Role, WitchPotions};
use werwolf_engine::events::{Broadcast, EventKind};
use werwolf_engine::phase::Phase;
use werwolf_engine::rules::Winner;
use werwolf_engine::session::{Command, GameSession, Reply};

fn started_with(config: GameConfig) -> GameSession {
    let mut session = GameSession::new(config).unwrap();
    for name in ["A", "B", "C", "D", "E"] {
        session.register(name).unwrap();
    }
    session.start_game(&["Werwolf", "Seherin", "Hexe", "Dorfbewohner"]).unwrap();
    session
}

fn started() -> GameSession {
    started_with(GameConfig::new().with_seed(3))
}

fn holder(session: &GameSession, kind: Role) -> String {
    session
        .roster()
        .iter()
        .find(|p| p.role.is_some_and(|r| r.same_kind(&kind)))
        .map(|p| p.name.clone())
        .unwrap()
}

fn witch_potions(session: &GameSession) -> WitchPotions {
    let witch = holder(session, Role::Witch(WitchPotions::full()));
    *session.roster().find(&witch).unwrap().role.unwrap().potions().unwrap()
}

fn alive(session: &GameSession, name: &str) -> bool {
    session.roster().find(name).unwrap().alive
}

// =============================================================================
// Werewolf vote
// =============================================================================

/// Test a night kill and its broadcasts.
#[test]
fn test_werewolf_vote() {
    let mut session = started();
    let seer = holder(&session, Role::Seer);

    let dispatch = session.werewolf_vote(&seer).unwrap();

    assert!(!alive(&session, &seer));
    assert_eq!(dispatch.reply, Reply::None);
    assert!(dispatch.broadcast("lobbyUpdate").is_some());
    assert!(dispatch.broadcast("eventLog").is_some());
    assert_eq!(session.log().last().unwrap().kind, EventKind::Kill);
}

/// Test that the night kill is rejected during the day.
#[test]
fn test_werewolf_vote_during_day() {
    let mut session = started();
    session.next_phase();
    let log_len = session.log().len();

    let err = session.werewolf_vote("A").unwrap_err();
    assert_eq!(err, GameError::InvalidPhase { action: "werewolfVote", phase: Phase::Day });
    assert!(alive(&session, "A"));
    assert_eq!(session.log().len(), log_len);
}

// =============================================================================
// Seer
// =============================================================================

/// Test that the seer learns the wolf's role.
#[test]
fn test_seer_check_reveals_role() {
    let mut session = started();
    let wolf = holder(&session, Role::Werewolf);

    let dispatch = session.seer_check(&wolf).unwrap();

    assert_eq!(dispatch.reply, Reply::Role(Some(Role::Werewolf)));
    assert!(dispatch.broadcast("lobbyUpdate").is_none());
    assert!(dispatch.broadcast("eventLog").is_some());
    assert_eq!(session.log().last().unwrap().kind, EventKind::Seer);
}

/// Test that a seer check on an unknown name changes nothing.
#[test]
fn test_seer_check_missing() {
    let mut session = started();
    let log_len = session.log().len();
    assert_eq!(session.seer_check("Z").unwrap_err(), GameError::NotFound("Z".into()));
    assert_eq!(session.log().len(), log_len);
}

/// Test the night-only seer switch.
#[test]
fn test_seer_night_only() {
    let mut session = started_with(GameConfig::new().with_seed(3).seer_night_only());
    assert!(session.seer_check("A").is_ok());

    session.next_phase();
    assert!(matches!(
        session.seer_check("A"),
        Err(GameError::InvalidPhase { action: "seerCheck", .. })
    ));
}

// =============================================================================
// Witch
// =============================================================================

/// Test heal after a night kill.
#[test]
fn test_witch_heals_night_victim() {
    let mut session = started();
    let victim = holder(&session, Role::Villager);
    session.werewolf_vote(&victim).unwrap();

    let dispatch = session.witch_action(WitchPotion::Heal, &victim).unwrap();

    assert_eq!(dispatch.reply, Reply::Ack);
    assert!(alive(&session, &victim));
    assert_eq!(witch_potions(&session), WitchPotions { heal: false, poison: true });
}

/// Test that healing a living player fails and spends nothing.
#[test]
fn test_witch_heal_living_fails() {
    let mut session = started();
    let before = session.log().len();

    assert!(session.witch_action(WitchPotion::Heal, "A").is_err());
    assert_eq!(witch_potions(&session), WitchPotions::full());
    assert_eq!(session.log().len(), before);
}

/// Test that each potion works once per game.
#[test]
fn test_witch_potions_single_use() {
    let mut session = started();
    let seer = holder(&session, Role::Seer);
    let wolf = holder(&session, Role::Werewolf);

    session.witch_action(WitchPotion::Poison, &seer).unwrap();
    assert!(session.witch_action(WitchPotion::Poison, &wolf).is_err());
    assert!(alive(&session, &wolf));

    session.witch_action(WitchPotion::Heal, &seer).unwrap();
    session.moderator_kill(&seer).unwrap();
    assert!(session.witch_action(WitchPotion::Heal, &seer).is_err());
    assert_eq!(witch_potions(&session), WitchPotions { heal: false, poison: false });
}

/// Test that potions refill for a new game.
#[test]
fn test_witch_potions_refill_on_restart() {
    let mut session = started();
    let seer = holder(&session, Role::Seer);
    session.witch_action(WitchPotion::Poison, &seer).unwrap();

    session.end_game();
    session.start_game(&["Werwolf", "Hexe"]).unwrap();

    assert_eq!(witch_potions(&session), WitchPotions::full());
}

/// Test that decoded witch commands reach the resolver.
#[test]
fn test_witch_action_command() {
    let mut session = started();
    let wolf = holder(&session, Role::Werewolf);
    let json = format!(r#"{{"command":"witchAction","action":"poison","targetName":"{}"}}"#, wolf);
    let command: Command = serde_json::from_str(&json).unwrap();

    let dispatch = session.dispatch(command).unwrap();
    assert_eq!(dispatch.reply, Reply::Ack);
    assert!(!alive(&session, &wolf));
}

// =============================================================================
// Day vote and moderator kill
// =============================================================================

/// Test a day lynch.
#[test]
fn test_day_vote() {
    let mut session = started();
    assert!(session.vote("A").is_err());

    session.next_phase();
    session.vote("A").unwrap();
    assert!(!alive(&session, "A"));
    assert_eq!(session.log().last().unwrap().message, "A wurde gehängt.");
}

/// Test that voting for a dead player fails.
#[test]
fn test_day_vote_dead_target() {
    let mut session = started();
    session.next_phase();
    session.vote("A").unwrap();
    assert!(matches!(session.vote("A"), Err(GameError::PreconditionFailed(_))));
}

/// Test that the moderator can kill in any phase.
#[test]
fn test_moderator_kill() {
    let mut session = started();
    session.moderator_kill("B").unwrap();
    session.next_phase();
    session.moderator_kill("C").unwrap();

    assert!(!alive(&session, "B"));
    assert!(!alive(&session, "C"));
    assert!(session.moderator_kill("Z").is_err());
}

/// Test that `submit` accepts raw actions.
#[test]
fn test_submit_action() {
    let mut session = started();
    let dispatch = session
        .submit(GameAction::ModeratorKill { target: "E".into() })
        .unwrap();
    assert!(dispatch.changed());
    assert!(!alive(&session, "E"));
}

// =============================================================================
// Win after kills
// =============================================================================

/// Test that kills do not end the game by default.
#[test]
fn test_kill_does_not_end_game_by_default() {
    let mut session = started();
    let wolf = holder(&session, Role::Werewolf);
    let dispatch = session.moderator_kill(&wolf).unwrap();

    assert_eq!(session.phase(), Phase::Night);
    assert!(dispatch.broadcast("gameEnded").is_none());
}

/// Test the continuous win check switch.
#[test]
fn test_kill_ends_game_when_configured() {
    let mut session = started_with(GameConfig::new().with_seed(3).check_win_after_kills());
    let wolf = holder(&session, Role::Werewolf);

    let dispatch = session.moderator_kill(&wolf).unwrap();

    assert_eq!(session.phase(), Phase::Ended);
    assert_eq!(dispatch.broadcasts[0], Broadcast::GameEnded(Some(Winner::Villagers)));
    assert_eq!(session.log().last().unwrap().kind, EventKind::End);
}

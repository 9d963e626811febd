use crate::app::Mode;
use crate::sim::economy::ShopItem;
use crate::sim::producers::ProducerKind;
use crate::sim::upgrades::UpgradeId;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task;
use tracing::warn;

/// Longest a blocking read waits before checking whether anyone still listens.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Waits up to `INPUT_POLL` for one terminal event.
pub fn poll_terminal() -> io::Result<Option<Event>> {
    if event::poll(INPUT_POLL)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forwards events from `poll` until the receiving side is dropped, so the
/// blocking reader never outlives the game loop by more than one poll.
pub async fn pump_events(tx: UnboundedSender<Event>, poll: fn() -> io::Result<Option<Event>>) {
    while !tx.is_closed() {
        match task::spawn_blocking(poll).await {
            Ok(Ok(Some(event))) => {
                if tx.send(event).is_err() {
                    break;
                }
            }
            Ok(Ok(None)) => {}
            Ok(Err(err)) => {
                warn!(error = %err, "terminal input failed");
                break;
            }
            Err(_) => break,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Begin,
    Bake,
    Buy(ShopItem),
    Prestige,
    OpenPrestigeShop,
    ClosePrestigeShop,
    ShopUp,
    ShopDown,
    ShopConfirm,
    BuyPrestigeItem(usize),
    DebugGrant,
    Redraw,
    KeepBaking,
    Quit,
}

/// Maps a key press to a command for the current mode. Keys that mean
/// nothing in that mode map to `None` and are ignored.
pub fn command_for(key: KeyEvent, mode: Mode, debug_keys: bool) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('l') if mode != Mode::Intro => Some(Command::Redraw),
            _ => None,
        };
    }

    match mode {
        Mode::Intro => Some(Command::Begin),
        Mode::Playing => playing_command(key.code, debug_keys),
        Mode::PrestigeShop => shop_command(key.code),
        Mode::Celebration => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Command::KeepBaking),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Quit),
            _ => None,
        },
    }
}

fn playing_command(code: KeyCode, debug_keys: bool) -> Option<Command> {
    let KeyCode::Char(c) = code else {
        return None;
    };
    match c {
        ' ' => Some(Command::Bake),
        'r' | 'R' => Some(Command::Prestige),
        's' | 'S' => Some(Command::OpenPrestigeShop),
        'l' | 'L' => Some(Command::Redraw),
        'q' | 'Q' => Some(Command::Quit),
        '$' if debug_keys => Some(Command::DebugGrant),
        _ => {
            if let Some(kind) = ProducerKind::from_hotkey(c) {
                Some(Command::Buy(ShopItem::Producer(kind)))
            } else {
                UpgradeId::from_digit(c).map(|id| Command::Buy(ShopItem::Upgrade(id)))
            }
        }
    }
}

fn shop_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::ClosePrestigeShop),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::ShopUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::ShopDown),
        KeyCode::Enter => Some(Command::ShopConfirm),
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c.to_digit(10)? as usize;
            Some(Command::BuyPrestigeItem(slot - 1))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn any_key_leaves_the_intro() {
        assert_eq!(
            command_for(key(KeyCode::Char('x')), Mode::Intro, false),
            Some(Command::Begin)
        );
        assert_eq!(
            command_for(key(KeyCode::Enter), Mode::Intro, false),
            Some(Command::Begin)
        );
    }

    #[test]
    fn playing_keys_map_to_single_operations() {
        let cases = [
            (KeyCode::Char(' '), Command::Bake),
            (
                KeyCode::Char('g'),
                Command::Buy(ShopItem::Producer(ProducerKind::Grandma)),
            ),
            (
                KeyCode::Char('B'),
                Command::Buy(ShopItem::Producer(ProducerKind::Bakery)),
            ),
            (
                KeyCode::Char('3'),
                Command::Buy(ShopItem::Upgrade(UpgradeId::RobotBakers)),
            ),
            (KeyCode::Char('r'), Command::Prestige),
            (KeyCode::Char('s'), Command::OpenPrestigeShop),
            (KeyCode::Char('q'), Command::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(command_for(key(code), Mode::Playing, false), Some(expected));
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(command_for(key(KeyCode::Char('z')), Mode::Playing, false), None);
        assert_eq!(command_for(key(KeyCode::Char('9')), Mode::Playing, false), None);
        assert_eq!(command_for(key(KeyCode::Tab), Mode::Playing, false), None);
        assert_eq!(command_for(key(KeyCode::Char('g')), Mode::Celebration, false), None);
    }

    #[test]
    fn debug_grant_requires_the_flag() {
        assert_eq!(command_for(key(KeyCode::Char('$')), Mode::Playing, false), None);
        assert_eq!(
            command_for(key(KeyCode::Char('$')), Mode::Playing, true),
            Some(Command::DebugGrant)
        );
    }

    #[test]
    fn shop_digits_select_items() {
        assert_eq!(
            command_for(key(KeyCode::Char('1')), Mode::PrestigeShop, false),
            Some(Command::BuyPrestigeItem(0))
        );
        assert_eq!(
            command_for(key(KeyCode::Esc), Mode::PrestigeShop, false),
            Some(Command::ClosePrestigeShop)
        );
        assert_eq!(
            command_for(key(KeyCode::Char('0')), Mode::PrestigeShop, false),
            None
        );
    }

    #[test]
    fn control_c_quits_from_anywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [Mode::Intro, Mode::Playing, Mode::PrestigeShop, Mode::Celebration] {
            assert_eq!(command_for(ctrl_c, mode, false), Some(Command::Quit));
        }
    }

    #[tokio::test]
    async fn pump_stops_once_the_game_loop_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let finished =
            tokio::time::timeout(Duration::from_secs(1), pump_events(tx, || Ok(None))).await;
        assert!(finished.is_ok());
    }

    #[tokio::test]
    async fn pump_forwards_events_until_the_receiver_drops() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let pump = tokio::spawn(pump_events(tx, || Ok(Some(Event::FocusGained))));
        assert_eq!(rx.recv().await, Some(Event::FocusGained));
        drop(rx);
        assert!(tokio::time::timeout(Duration::from_secs(1), pump).await.is_ok());
    }

    #[tokio::test]
    async fn pump_stops_on_a_read_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        pump_events(tx, || Err(io::Error::other("terminal gone"))).await;
        assert_eq!(rx.recv().await, None);
    }
}

use std::time::Duration;

use anyhow::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyEventKind},
    DefaultTerminal,
};
use tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedSender},
};
use tracing::debug;

use compte_api::compte::Compte;

use super::{
    render::draw,
    screen::{Action, Screen},
};
use crate::services::ComptesService;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the accounts screen until the user quits.
///
/// Blocks the calling thread, which becomes the UI thread. API calls run as tasks on
/// `runtime` and hand their result back through a channel drained between frames.
pub fn run_screen(service: ComptesService, runtime: Handle) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &service, &runtime);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    service: &ComptesService,
    runtime: &Handle,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Compte>>();
    let mut screen = Screen::default();

    dispatch(Action::Fetch, service, runtime, &tx);

    loop {
        while let Ok(comptes) = rx.try_recv() {
            screen.replace_comptes(comptes);
        }

        terminal.draw(|frame| draw(frame, &mut screen))?;
        if screen.should_quit() {
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = screen.handle_key(key) {
                        dispatch(action, service, runtime, &tx);
                    }
                }
            }
        }
    }
}

/// Fire one call; a successful completion is queued for the UI loop, a failed one was
/// already logged by the service and leaves nothing to apply.
fn dispatch(
    action: Action,
    service: &ComptesService,
    runtime: &Handle,
    tx: &UnboundedSender<Vec<Compte>>,
) {
    debug!("Dispatching {:?}", action);
    let service = service.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        if let Some(comptes) = action.perform(&service).await {
            // The receiver is gone once the screen is closed.
            let _ = tx.send(comptes);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::comptes::fake::{compte, FakeApi};
    use compte_api::compte::TypeCompte;

    #[tokio::test]
    async fn test_dispatch_delivers_completion() {
        let api = Arc::new(FakeApi::with(vec![compte(1, 5.0, TypeCompte::Courant)]));
        let service = ComptesService::new(api);
        let (tx, mut rx) = mpsc::unbounded_channel();

        dispatch(Action::Fetch, &service, &Handle::current(), &tx);

        let comptes = rx.recv().await.unwrap();
        assert_eq!(comptes, vec![compte(1, 5.0, TypeCompte::Courant)]);
    }

    #[tokio::test]
    async fn test_dispatch_drops_failures() {
        let service = ComptesService::new(Arc::new(FakeApi::failing(500)));
        let (tx, mut rx) = mpsc::unbounded_channel();

        dispatch(Action::Fetch, &service, &Handle::current(), &tx);
        drop(tx);

        assert!(rx.recv().await.is_none());
    }
}

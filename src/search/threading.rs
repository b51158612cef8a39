//! Background search execution.
//!
//! The search itself is single-threaded and blocking. A caller that must stay
//! responsive (an event loop driving human vs engine turns) hands a snapshot
//! of the position to a worker thread and collects the single result through
//! a one-shot channel. The worker owns its own `GameState` copy, so nothing
//! mutable is shared with the caller.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::{Color, GameState};
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{search, SearchConfig, SearchResult};

/// Handle to a search running on a worker thread.
#[derive(Debug)]
pub struct PendingSearch {
    receiver: Receiver<CheckersResult<SearchResult>>,
    worker: Option<JoinHandle<()>>,
}

/// Start searching `game_state` for `color` on a new thread.
pub fn spawn_search<S>(
    game_state: GameState,
    color: Color,
    config: SearchConfig,
    scorer: S,
) -> PendingSearch
where
    S: BoardScorer + 'static,
{
    let (sender, receiver) = mpsc::sync_channel(1);
    let worker = thread::spawn(move || {
        let result = search(&game_state, color, config, &scorer);
        // The caller may have dropped the handle; nothing left to deliver to.
        let _ = sender.send(result);
    });

    PendingSearch {
        receiver,
        worker: Some(worker),
    }
}

impl PendingSearch {
    /// Non-blocking poll. `None` while the worker is still searching.
    pub fn try_result(&mut self) -> Option<CheckersResult<SearchResult>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join_worker();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join_worker();
                Some(Err(CheckersError::SearchWorkerDisconnected))
            }
        }
    }

    /// Block until the worker delivers its result.
    pub fn wait(mut self) -> CheckersResult<SearchResult> {
        let result = self
            .receiver
            .recv()
            .map_err(|_| CheckersError::SearchWorkerDisconnected)?;
        self.join_worker();
        result
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

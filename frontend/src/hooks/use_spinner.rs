use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use spinner_shared::constants::SPIN_DURATION_MS;
use spinner_shared::option_list::OptionList;
use spinner_shared::spinner::{PendingSpin, SpinnerState};
use spinner_shared::storage::{persist_options, restore_options};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::storage::BrowserStorage;

pub enum SpinnerAction {
    Add(String),
    Remove(usize),
    Clear,
    BeginSpin(PendingSpin),
    Reveal(PendingSpin),
    DismissResult,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpinnerStore {
    pub state: SpinnerState,
}

impl Reducible for SpinnerStore {
    type Action = SpinnerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        let changed = match action {
            SpinnerAction::Add(text) => state.add_option(&text),
            SpinnerAction::Remove(index) => state.remove_option(index),
            SpinnerAction::Clear => {
                state.clear();
                true
            }
            SpinnerAction::BeginSpin(pending) => state.begin_spin(pending),
            SpinnerAction::Reveal(pending) => state.complete_spin(&pending),
            SpinnerAction::DismissResult => {
                state.dismiss_result();
                true
            }
        };

        if changed {
            Rc::new(Self { state })
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct SpinnerHandle {
    pub state: SpinnerState,
    pub on_add: Callback<String>,
    pub on_remove: Callback<usize>,
    pub on_clear: Callback<()>,
    pub on_spin: Callback<()>,
    pub on_dismiss: Callback<()>,
}

#[hook]
pub fn use_spinner() -> SpinnerHandle {
    let store = use_reducer(|| {
        let options = restore_options(&BrowserStorage);
        info!("Restored {} options", options.len());
        SpinnerStore {
            state: SpinnerState::new(options),
        }
    });

    // Full overwrite after every change to the list
    {
        let options: OptionList = store.state.options.clone();
        use_effect_with(options, |options| {
            persist_options(&BrowserStorage, options);
            || ()
        });
    }

    let on_add = {
        let store = store.clone();
        Callback::from(move |text: String| store.dispatch(SpinnerAction::Add(text)))
    };

    let on_remove = {
        let store = store.clone();
        Callback::from(move |index: usize| store.dispatch(SpinnerAction::Remove(index)))
    };

    let on_clear = {
        let store = store.clone();
        Callback::from(move |_: ()| store.dispatch(SpinnerAction::Clear))
    };

    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |_: ()| store.dispatch(SpinnerAction::DismissResult))
    };

    let on_spin = {
        let store = store.clone();
        Callback::from(move |_: ()| {
            let Some(pending) = store.state.plan_spin(&mut rand::thread_rng()) else {
                return;
            };
            store.dispatch(SpinnerAction::BeginSpin(pending.clone()));

            // One-shot reveal. Not cancelled by later edits to the list.
            let store = store.clone();
            spawn_local(async move {
                TimeoutFuture::new(SPIN_DURATION_MS).await;
                debug!("Revealing spin result");
                store.dispatch(SpinnerAction::Reveal(pending));
            });
        })
    };

    SpinnerHandle {
        state: store.state.clone(),
        on_add,
        on_remove,
        on_clear,
        on_spin,
        on_dismiss,
    }
}

use std::rc::Rc;

use common::{FormField, PredictionSession, SessionAction, SubmitGuard, submit};
use yew::prelude::*;

use crate::api_client::prediction::{get_countries, predict};

/// Reducer wrapper so async tasks always apply actions to the latest session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState(pub PredictionSession);

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut session = self.0.clone();
        session.apply(action);
        Rc::new(SessionState(session))
    }
}

pub struct PredictionHandle {
    pub session: UseReducerHandle<SessionState>,
    /// Input `(field, value)` changes
    pub on_field: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

/// State and actions of the prediction form. Loads the country list on mount.
#[hook]
pub fn use_prediction_session() -> PredictionHandle {
    let session = use_reducer(SessionState::default);
    let guard = use_state(SubmitGuard::new);

    // Fetch countries on mount; failures leave the selector with only the placeholder
    {
        let dispatcher = session.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_countries().await {
                    Ok(countries) => dispatcher.dispatch(SessionAction::CountriesLoaded(countries)),
                    Err(e) => log::warn!("Country list unavailable, selector stays empty: {}", e),
                }
            });
            || ()
        });
    }

    let on_field = {
        let dispatcher = session.dispatcher();
        Callback::from(move |(field, value): (FormField, String)| {
            log::trace!("Field {} changed", field.name());
            dispatcher.dispatch(SessionAction::UpdateField(field, value));
        })
    };

    let on_submit = {
        let dispatcher = session.dispatcher();
        let guard = (*guard).clone();
        let form = session.0.form().clone();

        Callback::from(move |_| {
            let dispatcher = dispatcher.clone();
            let guard = guard.clone();
            let form = form.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let sent = submit(
                    &guard,
                    form,
                    |action| dispatcher.dispatch(action),
                    |form| async move { predict(&form).await.map_err(|e| e.user_message()) },
                )
                .await;
                if !sent {
                    log::debug!("Submit ignored while a prediction is pending");
                }
            });
        })
    };

    PredictionHandle {
        session,
        on_field,
        on_submit,
    }
}

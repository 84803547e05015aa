//! Cookie consent state, shared through context.
//!
//! Drives the banner and, through `session::consent`, which store the
//! session lives in.

use dioxus::prelude::*;

use crate::session::consent::{self, Consent};

#[derive(Clone, Copy)]
pub struct ConsentContext {
    choice: Signal<Consent>,
    loaded: Signal<bool>,
}

impl ConsentContext {
    pub fn get(&self) -> Consent {
        (self.choice)()
    }

    /// Banner visibility: only after the stored choice has been read, and
    /// only while there is none. SSR never shows the banner; flashing it
    /// at every visitor on every render would defeat the stored answer.
    pub fn needs_prompt(&self) -> bool {
        (self.loaded)() && !self.get().is_answered()
    }

    /// Records the visitor's answer and migrates the session store.
    pub fn choose(&self, choice: Consent) {
        consent::set_consent(choice);
        let mut c = self.choice;
        c.set(choice);
    }
}

/// Initialize consent context provider - call once at app root
pub fn use_consent_provider() {
    let choice = use_signal(Consent::default);
    let loaded = use_signal(|| false);

    use_context_provider(|| ConsentContext { choice, loaded });

    #[cfg(target_arch = "wasm32")]
    {
        let mut choice = choice;
        let mut loaded = loaded;
        use_effect(move || {
            choice.set(consent::stored_consent());
            loaded.set(true);
        });
    }
}

/// Get consent context - use in any component
pub fn use_consent() -> ConsentContext {
    use_context::<ConsentContext>()
}

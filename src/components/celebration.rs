//! Floating glyphs shown after a successful registration.

use leptos::prelude::*;

use crate::state::auth::{FormState, Particle};

/// Particles are removed by the form controller once they have floated
/// for their lifetime.
#[component]
pub fn Celebration() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    view! {
        <div class="celebration" aria-hidden="true">
            <For
                each=move || form.with(|f| f.particles.clone())
                key=|particle| particle.id
                children=move |particle: Particle| {
                    view! {
                        <div
                            class="floating-element"
                            style:left=format!("{}vw", particle.left_vw)
                            style:animation-delay=format!("{}ms", particle.delay_ms)
                        >
                            {particle.glyph}
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Crisis support resources, toggled from the chat header.

use leptos::prelude::*;

#[component]
pub fn CrisisPanel(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal modal--open" role="dialog" aria-labelledby="crisis-title">
                <div class="modal-content">
                    <div class="modal-header">
                        <h3 id="crisis-title">"Crisis Support Resources"</h3>
                        <button type="button" class="modal-close" on:click=move |_| open.set(false)>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body crisis-resources">
                        <div class="resource-item urgent">
                            <h4>"🚨 Immediate Help"</h4>
                            <p>
                                <strong>"National Suicide Prevention Lifeline: "</strong>
                                <a href="tel:988">"988"</a>
                            </p>
                            <p>
                                <strong>"Crisis Text Line: "</strong>
                                "Text HOME to "
                                <a href="sms:741741">"741741"</a>
                            </p>
                        </div>
                        <div class="resource-item">
                            <h4>"📞 24/7 Support"</h4>
                            <p>
                                <strong>"SAMHSA National Helpline: "</strong>
                                <a href="tel:1-800-662-4357">"1-800-662-HELP"</a>
                            </p>
                            <p>"Free, confidential, 24/7 treatment referral service"</p>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

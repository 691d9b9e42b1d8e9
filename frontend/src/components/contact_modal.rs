use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::overlay::Overlay;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    html! {
        <Overlay on_close={props.on_close.clone()} class="contact-modal">
            <div class="contact-modal-header">
                <h2>{"Contactez-nous"}</h2>
                <p>{"Nous sommes à votre écoute pour répondre à toutes vos questions"}</p>
            </div>
            <ContactForm on_success={props.on_close.clone()} id_prefix="modal-contact" />
            <style>
                {r#"
                .contact-modal {
                    padding: 2.5rem;
                }
                .contact-modal-header {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }
                .contact-modal-header h2 {
                    font-family: 'Crimson Text', serif;
                    font-size: 2.25rem;
                    font-weight: 600;
                    color: var(--foreground);
                    margin: 0;
                }
                .contact-modal-header p {
                    color: rgba(61, 52, 45, 0.6);
                    margin: 0;
                }
                @media (max-width: 768px) {
                    .contact-modal {
                        padding: 2rem;
                    }
                    .contact-modal-header h2 {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </Overlay>
    }
}

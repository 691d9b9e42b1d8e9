use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page introuvable"}</h1>
            <p>{"La page que vous cherchez n'existe pas ou a été déplacée."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Retour à l'accueil"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 2rem;
                    text-align: center;
                    background: var(--background);
                    color: var(--foreground);
                }
                .not-found-page h1 {
                    font-family: 'Crimson Text', serif;
                    font-size: 3rem;
                    margin: 0;
                }
                .not-found-link {
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    color: white;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

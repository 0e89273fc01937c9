use std::cell::Cell;
use std::rc::Rc;

use gloo::console::{error, log, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::Loader;
use crate::api;
use crate::config::Config;
use crate::resolve::duplicate_slugs;
use crate::route::Route;
use crate::state::{PeopleState, NO_PEOPLE_MESSAGE};
use crate::table::{build_rows, ParentCell, PersonRow};

#[derive(Properties, PartialEq)]
pub struct PeoplePageProps {
    #[prop_or_default]
    pub selected: Option<String>,
}

fn parent_cell(cell: &ParentCell, link_class: Option<&'static str>) -> Html {
    match cell {
        ParentCell::Link { name, slug } => html! {
            <td>
                <a href={Route::person(slug).href()} class={classes!(link_class)}>
                    { name.clone() }
                </a>
            </td>
        },
        ParentCell::Text(text) => html! { <td>{ text.clone() }</td> },
    }
}

fn person_row(row: &PersonRow) -> Html {
    html! {
        <tr
            key={row.key.clone()}
            data-cy="person"
            class={classes!(row.selected.then_some("has-background-warning"))}
        >
            <td>
                <a
                    href={Route::person(&row.slug).href()}
                    class={classes!(row.is_female().then_some("has-text-danger"))}
                >
                    { row.name.clone() }
                </a>
            </td>
            <td>{ row.sex.as_str() }</td>
            <td>{ row.born.to_string() }</td>
            <td>{ row.died.clone() }</td>
            { parent_cell(&row.mother, Some("has-text-danger")) }
            { parent_cell(&row.father, None) }
        </tr>
    }
}

fn people_table(rows: &[PersonRow]) -> Html {
    html! {
        <table
            data-cy="peopleTable"
            class="table is-striped is-hoverable is-narrow is-fullwidth"
        >
            <thead>
                <tr>
                    <th>{ "Name" }</th>
                    <th>{ "Sex" }</th>
                    <th>{ "Born" }</th>
                    <th>{ "Died" }</th>
                    <th>{ "Mother" }</th>
                    <th>{ "Father" }</th>
                </tr>
            </thead>

            <tbody>
                { for rows.iter().map(person_row) }
            </tbody>
        </table>
    }
}

#[function_component(PeoplePage)]
pub fn people_page(props: &PeoplePageProps) -> Html {
    let config = use_state(Config::from_env);
    let state = use_state(|| PeopleState::Loading);

    // Fetch once per mount; a response landing after unmount is dropped.
    {
        let url = config.people_url.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let cancelled = Rc::new(Cell::new(false));

            {
                let cancelled = cancelled.clone();
                spawn_local(async move {
                    log!(format!("fetching people from {url}"));
                    let result = api::fetch_people(&url).await;
                    if cancelled.get() {
                        log!("people page closed before the response arrived, dropping it");
                        return;
                    }

                    match &result {
                        Ok(people) => {
                            log!(format!("received {} people", people.len()));
                        }
                        Err(e) => {
                            error!(format!("failed to load people: {e}"));
                        }
                    }

                    let next = PeopleState::from_fetch(&result);
                    if let PeopleState::Loaded(people) = &next {
                        let dups = duplicate_slugs(people);
                        if !dups.is_empty() {
                            warn!(format!("people sharing a slug: {}", dups.join(", ")));
                        }
                    }
                    state.set(next);
                });
            }

            move || cancelled.set(true)
        });
    }

    let body = match &*state {
        PeopleState::Loading => html! { <Loader /> },
        PeopleState::Failed(message) => html! {
            <p data-cy="peopleLoadingError" class="has-text-danger">
                { message.clone() }
            </p>
        },
        PeopleState::Empty => html! {
            <p data-cy="noPeopleMessage">{ NO_PEOPLE_MESSAGE }</p>
        },
        PeopleState::Loaded(people) => {
            people_table(&build_rows(people, props.selected.as_deref()))
        }
    };

    html! {
        <>
            <h1 class="title">{ "People Page" }</h1>

            <div class="block">
                <div class="box table-container">
                    { body }
                </div>
            </div>
        </>
    }
}

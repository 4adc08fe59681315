//! Community feed: stories from donors and recipients. Public; posting needs a
//! session.

use leptos::prelude::*;

use crate::state::community::{CommunityState, Story};
use crate::state::session::SessionContext;
use crate::util::notify::use_notifier;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let community = expect_context::<RwSignal<CommunityState>>();
    let session = expect_context::<SessionContext>();
    let notifier = use_notifier();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    let on_like = Callback::new(move |id: u32| {
        if let Some(Err(e)) = community.try_update(|c| c.toggle_like(id)) {
            notifier.action_failed("Could not update like", &e);
        }
    });

    let on_post = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(s) = session.session() else {
            notifier.info("Sign in to share", "Only members can post stories.");
            return;
        };
        let (t, c) = (title.get_untracked(), content.get_untracked());
        match community.try_update(|feed| feed.post(&s.display_name, s.role.label(), &t, &c)) {
            Some(Ok(_)) => {
                title.set(String::new());
                content.set(String::new());
                notifier.success("Story shared", "Thanks for inspiring the community!");
            }
            Some(Err(e)) => {
                notifier.action_failed("Could not share story", &e);
            }
            None => {}
        }
    };

    view! {
        <section class="community">
            <header class="page-header">
                <h1>"Community"</h1>
                <p class="page-header__subtitle">"Stories from donors and recipients making a difference"</p>
            </header>

            <Show when=move || session.role().is_some()>
                <form class="community__composer" on:submit=on_post>
                    <input
                        type="text"
                        placeholder="Story title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="What happened?"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    <button class="button" type="submit">"Share Story"</button>
                </form>
            </Show>

            <div class="community__feed">
                <For
                    each=move || community.with(|c| c.stories().to_vec())
                    key=|s| (s.id, s.likes, s.liked_by_me)
                    children=move |story: Story| view! { <StoryCard story=story on_like=on_like/> }
                />
            </div>
        </section>
    }
}

#[component]
fn StoryCard(story: Story, on_like: Callback<u32>) -> impl IntoView {
    let id = story.id;
    view! {
        <article class="story-card">
            <header class="story-card__header">
                <strong>{story.author}</strong>
                <span class="badge">{story.author_role}</span>
                <span class="story-card__time">{story.posted}</span>
            </header>
            <h3>{story.title}</h3>
            <p>{story.content}</p>
            <footer class="story-card__actions">
                <button
                    class="story-card__like"
                    class:story-card__like--active=story.liked_by_me
                    on:click=move |_| on_like.run(id)
                >
                    {format!("♥ {}", story.likes)}
                </button>
                <span class="story-card__comments">{format!("{} comments", story.comments)}</span>
            </footer>
        </article>
    }
}

// web_app/pages/blog.rs - Blog index and single post

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::web_app::components::{
    blog_excerpt, blog_href, BlogCard, BlogMeta, ErrorDisplay, FeaturedPost, Loading, NotFoundView, Pagination,
    RefreshErrorBanner, SelectString, ShareBar, TextInput,
};
use crate::web_app::content::BRAND_NAME;
use crate::web_app::context::{use_app_context, use_store};
use crate::web_app::ui::links::absolute_url;
use crate::web_app::ui::BlogListing;

#[component]
pub fn BlogListPage() -> impl IntoView {
    let context = use_app_context();
    let store = context.blogs.clone();
    let categories_store = context.categories.clone();
    let state = use_store(store.store());
    let categories = use_store(categories_store.store());

    {
        let store = store.clone();
        Effect::new(move |_| {
            let store = store.clone();
            let categories_store = categories_store.clone();
            spawn_local(async move {
                categories_store.fetch_blog_categories().await;
            });
            spawn_local(async move {
                store.fetch_blogs().await;
            });
        });
    }

    let search = RwSignal::new(state.with_untracked(|s| s.filters.search_query.clone()));

    let on_search = {
        let store = store.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let store = store.clone();
            let query = search.get_untracked();
            spawn_local(async move { store.set_search(query).await });
        }
    };

    let on_category = {
        let store = store.clone();
        Callback::new(move |slug: String| {
            let store = store.clone();
            let category = Some(slug).filter(|s| !s.is_empty());
            spawn_local(async move { store.set_category(category).await });
        })
    };

    let on_page = {
        let store = store.clone();
        Callback::new(move |page: u32| {
            let store = store.clone();
            spawn_local(async move { store.set_page(page).await });
        })
    };

    let on_retry = Callback::new(move |()| {
        let store = store.clone();
        spawn_local(async move { store.fetch_blogs().await });
    });

    let category_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All Topics".to_string())];
        categories.with(|c| {
            options.extend(c.blog_categories.iter().map(|cat| (cat.slug.clone(), cat.name.clone())));
        });
        options
    });
    let selected_category = Signal::derive(move || state.with(|s| s.filters.selected_category.clone().unwrap_or_default()));
    let pagination = Signal::derive(move || state.with(|s| s.filters.pagination));
    let stale_error = Signal::derive(move || state.with(|s| s.error.clone().filter(|_| !s.blogs.is_empty())));

    view! {
        <Title text=format!("Blog | {}", BRAND_NAME) />

        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <header class="mb-8 flex flex-col md:flex-row md:items-end md:justify-between gap-4">
                <div>
                    <h1 class="text-4xl font-serif font-bold text-stone-900">"The Saffron Journal"</h1>
                    <p class="mt-2 text-stone-600">"Recipes, health notes and stories from the fields"</p>
                </div>
                <div class="flex gap-3">
                    <form class="flex gap-2" on:submit=on_search>
                        <TextInput value=search placeholder="Search articles..." input_type="search" name="search" />
                    </form>
                    <SelectString value=selected_category options=category_options on_change=on_category />
                </div>
            </header>

            {move || {
                let (loading, error, posts) = state.with(|s| (s.loading, s.error.clone(), s.blogs.clone()));
                if loading && posts.is_empty() {
                    return view! { <Loading message="Loading articles..." /> }.into_any();
                }
                if let (Some(error), true) = (error, posts.is_empty()) {
                    return view! { <ErrorDisplay error=error on_retry=on_retry /> }.into_any();
                }
                match BlogListing::from_posts(posts) {
                    BlogListing::Empty => view! {
                        <div class="bg-white rounded-2xl p-16 text-center border border-stone-100">
                            <span class="text-4xl">"📝"</span>
                            <h2 class="mt-4 text-xl font-semibold text-stone-800">"No posts yet"</h2>
                            <p class="mt-2 text-stone-500">"Check back soon for new articles."</p>
                        </div>
                    }
                    .into_any(),
                    BlogListing::Featured { featured, rest } => view! {
                        <RefreshErrorBanner error=stale_error on_retry=on_retry />
                        <FeaturedPost blog=featured />
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {rest.into_iter().map(|blog| view! { <BlogCard blog=blog /> }).collect_view()}
                        </div>
                    }
                    .into_any(),
                }
            }}

            <Pagination pagination=pagination on_page=on_page />
        </div>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let context = use_app_context();
    let store = context.blogs.clone();
    let state = use_store(store.store());
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").map(|s| s.to_string())).unwrap_or_default());

    {
        let store = store.clone();
        Effect::new(move |_| {
            let slug = slug.get();
            if slug.is_empty() {
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                store.fetch_blog(&slug).await;
                store.record_view(&slug).await;
            });
        });
    }

    let on_like = {
        let store = store.clone();
        Callback::new(move |()| {
            let store = store.clone();
            let slug = slug.get_untracked();
            spawn_local(async move { store.like_blog(&slug).await });
        })
    };

    let on_retry = Callback::new(move |()| {
        let store = store.clone();
        let slug = slug.get_untracked();
        spawn_local(async move { store.fetch_blog(&slug).await });
    });

    let site_url = context.config.site_url.clone();

    view! {
        <article class="max-w-3xl mx-auto px-4 sm:px-6 py-12">
            {move || {
                let current = state.with(|s| s.current_blog.clone().filter(|b| b.slug == slug.get()));
                let (loading, not_found, error) =
                    state.with(|s| (s.detail_loading, s.not_found, s.detail_error.clone()));
                match (current, error) {
                    (Some(blog), _) => {
                        let liked = state.with(|s| s.has_liked(&blog.slug));
                        let can_like = state.with(|s| s.can_like(&blog.slug));
                        let page_url = absolute_url(&site_url, &blog_href(&blog.slug));
                        let title = blog.title.clone();
                        view! {
                            <Title text=format!("{} | {}", blog.title, BRAND_NAME) />
                            <Meta name="description" content=blog_excerpt(&blog, 155) />

                            <A href="/blog" attr:class="text-sm text-amber-700 hover:underline">"← All articles"</A>
                            <h1 class="mt-4 text-4xl md:text-5xl font-serif font-bold text-stone-900 leading-tight">
                                {blog.title.clone()}
                            </h1>
                            <div class="mt-4 flex items-center gap-4">
                                {blog.author.clone().map(|author| view! {
                                    <span class="text-sm font-medium text-stone-700">"By " {author}</span>
                                })}
                                <BlogMeta blog=blog.clone() />
                            </div>

                            {blog.featured_image.clone().map(|src| view! {
                                <img class="mt-8 w-full rounded-2xl shadow-md" src=src alt=blog.title.clone() />
                            })}

                            <div class="prose prose-stone prose-lg max-w-none mt-10" inner_html=blog.content.clone()></div>

                            {(!blog.tags.is_empty()).then(|| view! {
                                <div class="mt-8 flex flex-wrap gap-2">
                                    {blog.tags.iter().map(|tag| view! {
                                        <span class="px-3 py-1 text-xs rounded-full bg-amber-50 text-amber-800">{format!("#{}", tag)}</span>
                                    }).collect_view()}
                                </div>
                            })}

                            <div class="mt-10 pt-6 border-t border-stone-200 flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                                <button
                                    type="button"
                                    class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-red-200 text-red-600 hover:bg-red-50 disabled:opacity-60 disabled:cursor-default"
                                    disabled=!can_like
                                    on:click=move |_| on_like.run(())
                                >
                                    {if liked { "♥" } else { "♡" }}
                                    " " {blog.likes}
                                </button>
                                <ShareBar url=page_url title=title />
                            </div>
                        }
                        .into_any()
                    }
                    (None, _) if not_found => view! {
                        <Title text="Article Not Found" />
                        <NotFoundView title="Article not found" back_href="/blog" back_label="Back to Blog" />
                    }
                    .into_any(),
                    (None, Some(error)) if !loading => view! { <ErrorDisplay error=error on_retry=on_retry /> }.into_any(),
                    _ => view! { <Loading message="Loading article..." /> }.into_any(),
                }
            }}
        </article>
    }
}

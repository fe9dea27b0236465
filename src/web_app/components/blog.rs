// web_app/components/blog.rs - Blog cards, featured post and share bar

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::model::Blog;
use crate::web_app::ui::format::{format_date, read_time_label, strip_html, truncate};
use crate::web_app::ui::links::ShareTarget;

const PLACEHOLDER_COVER: &str = "/images/placeholder-blog.jpg";

pub fn blog_href(slug: &str) -> String {
    format!("/blog/{}", slug)
}

/// Excerpt, or the first words of the content when no excerpt was written
pub fn blog_excerpt(blog: &Blog, max_chars: usize) -> String {
    if blog.excerpt.trim().is_empty() {
        truncate(&strip_html(&blog.content), max_chars)
    } else {
        truncate(blog.excerpt.trim(), max_chars)
    }
}

/// Date, read time and views in one line
#[component]
pub fn BlogMeta(blog: Blog) -> impl IntoView {
    let date = blog.display_date().map(|d| format_date(&d));
    view! {
        <div class="flex items-center gap-3 text-xs text-stone-500">
            {date.map(|d| view! { <span>{d}</span> <span>"·"</span> })}
            <span>{read_time_label(blog.read_time, &blog.content)}</span>
            <span>"·"</span>
            <span>{format!("{} views", blog.views)}</span>
        </div>
    }
}

#[component]
pub fn BlogCard(blog: Blog) -> impl IntoView {
    let cover = blog.featured_image.clone().unwrap_or_else(|| PLACEHOLDER_COVER.to_string());
    let excerpt = blog_excerpt(&blog, 140);
    let category = blog.category.as_ref().and_then(|c| c.name()).map(str::to_string);

    view! {
        <A
            href=blog_href(&blog.slug)
            attr:class="group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 border border-stone-100 flex flex-col overflow-hidden"
        >
            <div class="aspect-video bg-stone-100 overflow-hidden">
                <img
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                    src=cover
                    alt=blog.title.clone()
                    loading="lazy"
                />
            </div>
            <div class="p-5 flex flex-col flex-1 gap-3">
                {category.map(|c| view! {
                    <span class="text-xs uppercase tracking-wide text-amber-700 font-semibold">{c}</span>
                })}
                <h3 class="font-bold text-lg text-stone-900 group-hover:text-amber-700 transition-colors line-clamp-2">
                    {blog.title.clone()}
                </h3>
                <p class="text-sm text-stone-600 line-clamp-3 flex-1">{excerpt}</p>
                <BlogMeta blog=blog />
            </div>
        </A>
    }
}

/// Wide card for the newest post at the top of the blog index
#[component]
pub fn FeaturedPost(blog: Blog) -> impl IntoView {
    let cover = blog.featured_image.clone().unwrap_or_else(|| PLACEHOLDER_COVER.to_string());
    let excerpt = blog_excerpt(&blog, 260);

    view! {
        <A
            href=blog_href(&blog.slug)
            attr:class="group grid grid-cols-1 lg:grid-cols-2 bg-white rounded-2xl shadow-md overflow-hidden border border-stone-100 mb-12"
        >
            <div class="aspect-video lg:aspect-auto bg-stone-100 overflow-hidden">
                <img
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-700"
                    src=cover
                    alt=blog.title.clone()
                />
            </div>
            <div class="p-8 flex flex-col justify-center gap-4">
                <span class="text-xs font-bold uppercase tracking-widest text-amber-600">"Featured"</span>
                <h2 class="text-3xl font-serif font-bold text-stone-900 group-hover:text-amber-700 transition-colors">
                    {blog.title.clone()}
                </h2>
                <p class="text-stone-600 leading-relaxed">{excerpt}</p>
                {blog.author.clone().map(|author| view! {
                    <span class="text-sm text-stone-500">"By " {author}</span>
                })}
                <BlogMeta blog=blog />
            </div>
        </A>
    }
}

/// Share links for Facebook, Twitter and LinkedIn
#[component]
pub fn ShareBar(
    /// Absolute URL of the page being shared
    url: String,
    title: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <span class="text-sm font-medium text-stone-600">"Share:"</span>
            {ShareTarget::ALL.into_iter().map(|target| view! {
                <a
                    href=target.share_url(&url, &title)
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-3 py-1.5 text-sm rounded-full border border-stone-200 text-stone-700 hover:bg-amber-50 hover:border-amber-300"
                >
                    {target.label()}
                </a>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(excerpt: &str, content: &str) -> Blog {
        serde_json::from_value(serde_json::json!({
            "_id": "b1",
            "slug": "grading-saffron",
            "title": "Grading saffron",
            "excerpt": excerpt,
            "content": content,
        }))
        .unwrap()
    }

    #[test]
    fn test_blog_href() {
        assert_eq!(blog_href("grading-saffron"), "/blog/grading-saffron");
    }

    #[test]
    fn test_excerpt_prefers_written_excerpt() {
        let post = blog("  How ISO 3632 grades work ", "<p>Long body</p>");
        assert_eq!(blog_excerpt(&post, 100), "How ISO 3632 grades work");
    }

    #[test]
    fn test_excerpt_falls_back_to_content() {
        let post = blog("", "<p>Saffron is graded by <b>colour</b> strength.</p>");
        assert_eq!(blog_excerpt(&post, 9), "Saffron i...");
        assert_eq!(blog_excerpt(&post, 100), "Saffron is graded by colour strength.");
    }
}

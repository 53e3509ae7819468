//! Seeded mock collections.
//!
//! Every function returns a fresh owned copy so each page mount starts from
//! the same data. The all-blogs feed is generated from a seeded RNG: the same
//! start index always yields the same records.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use super::records::{
    Article, BlogPost, Bookmark, Comment, FeaturedPost, Following, HistoryItem, Notification, NotificationKind,
    Profile, SavedBlog, Video,
};
use crate::config::DEMO_EMAIL;

/// Categories offered by the all-blogs category selector.
pub const CATEGORIES: [&str; 7] = ["Technology", "Programming", "Design", "AI/ML", "Web Development", "Mobile", "DevOps"];

/// Tags assigned to generated posts.
pub const TAGS: [&str; 11] = [
    "JavaScript", "React", "TypeScript", "Node.js", "Python", "CSS", "HTML", "API", "Database", "Frontend", "Backend",
];

/// Tags offered by the all-blogs tag selector.
pub const FILTER_TAGS: [&str; 9] = ["JavaScript", "React", "TypeScript", "Node.js", "Python", "CSS", "HTML", "API", "Database"];

/// Tags shown on the landing page.
pub const TRENDING_TAGS: [&str; 10] = [
    "React.js", "JavaScript", "Node.js", "TypeScript", "Next.js", "GraphQL", "Vue.js", "Python", "MongoDB", "Express.js",
];

const PLACEHOLDER: &str = "/placeholder.svg";

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn rfc3339(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_default()
}

/// Generate `count` feed posts with ids starting at `start_id`, dated within
/// the 30 days before `now`.
pub fn generate_blogs(start_id: u32, count: usize, now: OffsetDateTime) -> Vec<BlogPost> {
    let mut rng = SmallRng::seed_from_u64(u64::from(start_id));
    // Whole seconds keep every generated date the same RFC 3339 width.
    let now = now.replace_nanosecond(0).unwrap_or(now);
    (0..count)
        .map(|offset| {
            #[allow(clippy::cast_possible_truncation)]
            let id = start_id + offset as u32;
            let age = Duration::seconds(rng.random_range(0..30 * 24 * 60 * 60));
            let mut tags = TAGS.to_vec();
            tags.shuffle(&mut rng);
            tags.truncate(rng.random_range(1..=3));
            BlogPost {
                id,
                title: format!("Blog Post {id}: Advanced Tips for Modern Development"),
                excerpt: format!(
                    "This is an excerpt for blog post {id}. It provides a brief overview of the content and gives readers a taste of what to expect."
                ),
                author: format!("Author {}", rng.random_range(1..=10_u32)),
                date: rfc3339(now - age),
                read_time_minutes: rng.random_range(5..20),
                thumbnail: PLACEHOLDER.to_owned(),
                likes: rng.random_range(10..210),
                comments: rng.random_range(1..51),
                views: rng.random_range(100..1100),
                tags: owned(&tags),
                category: (*CATEGORIES.choose(&mut rng).unwrap_or(&CATEGORIES[0])).to_owned(),
            }
        })
        .collect()
}

pub fn history() -> Vec<HistoryItem> {
    vec![
        HistoryItem {
            id: 1,
            title: "Getting Started with React Hooks".to_owned(),
            excerpt: "Learn the fundamentals of React Hooks and how they can simplify your component logic...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400".to_owned(),
            author: "Alice Johnson".to_owned(),
            read_at: "2024-01-15T10:30:00Z".to_owned(),
            read_time: 8,
            likes: 245,
            views: 3200,
        },
        HistoryItem {
            id: 2,
            title: "Advanced TypeScript Patterns".to_owned(),
            excerpt: "Explore advanced TypeScript patterns that can make your code more robust and maintainable...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400".to_owned(),
            author: "Bob Smith".to_owned(),
            read_at: "2024-01-14T15:45:00Z".to_owned(),
            read_time: 12,
            likes: 189,
            views: 2800,
        },
        HistoryItem {
            id: 3,
            title: "CSS Grid vs Flexbox: When to Use What".to_owned(),
            excerpt: "A comprehensive guide to understanding when to use CSS Grid versus Flexbox for your layouts...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400".to_owned(),
            author: "Carol Davis".to_owned(),
            read_at: "2024-01-13T09:15:00Z".to_owned(),
            read_time: 6,
            likes: 156,
            views: 2100,
        },
    ]
}

pub fn bookmarks() -> Vec<Bookmark> {
    vec![
        Bookmark {
            id: 1,
            title: "The Future of Web Development".to_owned(),
            excerpt: "Exploring upcoming trends and technologies that will shape the future of web development...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=400".to_owned(),
            author: "Emma Thompson".to_owned(),
            bookmarked_at: "2024-01-12T09:30:00Z".to_owned(),
            read_time: 8,
            likes: 456,
            views: 5200,
            tags: owned(&["Web Development", "Future Tech", "Trends"]),
            url: "/blog/1".to_owned(),
        },
        Bookmark {
            id: 2,
            title: "JavaScript ES2024 Features".to_owned(),
            excerpt: "A comprehensive guide to the new features coming in JavaScript ES2024 and how to use them...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=400".to_owned(),
            author: "David Kim".to_owned(),
            bookmarked_at: "2024-01-09T14:45:00Z".to_owned(),
            read_time: 12,
            likes: 289,
            views: 3800,
            tags: owned(&["JavaScript", "ES2024", "Features"]),
            url: "/blog/2".to_owned(),
        },
        Bookmark {
            id: 3,
            title: "Database Design Best Practices".to_owned(),
            excerpt: "Learn essential database design principles that will make your applications more efficient...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1518770660439-4636190af475?w=400".to_owned(),
            author: "Rachel Martinez".to_owned(),
            bookmarked_at: "2024-01-07T11:20:00Z".to_owned(),
            read_time: 15,
            likes: 234,
            views: 2900,
            tags: owned(&["Database", "Design", "Best Practices"]),
            url: "/blog/3".to_owned(),
        },
    ]
}

pub fn saved_blogs() -> Vec<SavedBlog> {
    vec![
        SavedBlog {
            id: 1,
            title: "Building Scalable React Applications".to_owned(),
            excerpt: "Learn best practices for building large-scale React applications that can grow with your team...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400".to_owned(),
            author: "Sarah Wilson".to_owned(),
            saved_at: "2024-01-10T14:20:00Z".to_owned(),
            read_time: 15,
            likes: 342,
            views: 4500,
            category: "React".to_owned(),
        },
        SavedBlog {
            id: 2,
            title: "Mastering CSS Animations".to_owned(),
            excerpt: "Deep dive into CSS animations and transitions to create smooth, performant web experiences...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400".to_owned(),
            author: "Mike Chen".to_owned(),
            saved_at: "2024-01-08T11:15:00Z".to_owned(),
            read_time: 10,
            likes: 198,
            views: 2800,
            category: "CSS".to_owned(),
        },
        SavedBlog {
            id: 3,
            title: "Node.js Performance Optimization".to_owned(),
            excerpt: "Techniques and strategies to optimize your Node.js applications for better performance...".to_owned(),
            thumbnail: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400".to_owned(),
            author: "Alex Johnson".to_owned(),
            saved_at: "2024-01-05T16:30:00Z".to_owned(),
            read_time: 12,
            likes: 267,
            views: 3200,
            category: "Node.js".to_owned(),
        },
    ]
}

pub fn followings() -> Vec<Following> {
    let person = |id, name: &str, email: &str, username: &str, bio: &str, followers| Following {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        username: username.to_owned(),
        bio: bio.to_owned(),
        followers,
        following: true,
        profile_image: None,
    };
    vec![
        person(
            1,
            "Alice Johnson",
            "alice@example.com",
            "alice_dev",
            "Frontend developer passionate about React and TypeScript",
            1250,
        ),
        person(
            2,
            "Bob Smith",
            "bob@example.com",
            "bob_fullstack",
            "Full-stack developer building scalable web applications",
            890,
        ),
        person(
            3,
            "Carol Davis",
            "carol@example.com",
            "carol_design",
            "UI/UX designer and occasional blogger about design trends",
            2100,
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_owned(),
            title: "New Blog Published".to_owned(),
            message: "Your blog \"React Best Practices\" has been published successfully.".to_owned(),
            is_read: false,
            timestamp: "2 hours ago".to_owned(),
            kind: NotificationKind::Success,
        },
        Notification {
            id: "2".to_owned(),
            title: "New Follower".to_owned(),
            message: "John Doe started following you.".to_owned(),
            is_read: false,
            timestamp: "5 hours ago".to_owned(),
            kind: NotificationKind::Info,
        },
        Notification {
            id: "3".to_owned(),
            title: "Comment on your blog".to_owned(),
            message: "Someone commented on your blog \"JavaScript Tips\".".to_owned(),
            is_read: true,
            timestamp: "1 day ago".to_owned(),
            kind: NotificationKind::Info,
        },
    ]
}

/// Profile shown to the demo account; other emails reuse it with their own address.
pub fn profile(email: &str) -> Profile {
    Profile {
        name: "John Doe".to_owned(),
        email: if email.is_empty() { DEMO_EMAIL.to_owned() } else { email.to_owned() },
        username: "johndoe".to_owned(),
        bio: "Full-stack developer passionate about React and TypeScript".to_owned(),
        website: "https://johndoe.dev".to_owned(),
        location: "San Francisco, CA".to_owned(),
        phone: "+1 (555) 123-4567".to_owned(),
        profile_image: None,
    }
}

/// Posts authored by the signed-in user, for the profile dashboard.
pub fn my_posts() -> Vec<BlogPost> {
    let post = |id, title: &str, date: &str, likes, comments, views, tags: &[&str], category: &str| BlogPost {
        id,
        title: title.to_owned(),
        excerpt: String::new(),
        author: "John Doe".to_owned(),
        date: date.to_owned(),
        read_time_minutes: 8,
        thumbnail: PLACEHOLDER.to_owned(),
        likes,
        comments,
        views,
        tags: owned(tags),
        category: category.to_owned(),
    };
    vec![
        post(
            1,
            "Getting Started with React and TypeScript",
            "2024-01-15T08:00:00Z",
            127,
            23,
            1840,
            &["React", "TypeScript"],
            "Web Development",
        ),
        post(
            2,
            "React Best Practices",
            "2024-01-02T08:00:00Z",
            98,
            14,
            1210,
            &["React"],
            "Programming",
        ),
        post(
            3,
            "JavaScript Tips",
            "2023-12-18T08:00:00Z",
            64,
            9,
            870,
            &["JavaScript"],
            "Programming",
        ),
    ]
}

const EDITABLE_BODY: &str = r#"# Getting Started with React and TypeScript

## Introduction

React with TypeScript provides excellent type safety and developer experience.

## Installation

```bash
npx create-react-app my-app --template typescript
cd my-app
npm start
```

## Basic Component

```tsx
interface Props {
  name: string;
}

const Greeting = ({ name }: Props) => <h1>Hello, {name}!</h1>;
```

This is a comprehensive guide to get you started with React and TypeScript development."#;

const DETAIL_BODY: &str = r"Artificial intelligence is changing how we design, build, and ship web applications.

## Smarter tooling

Code completion, automated testing, and **AI-assisted reviews** catch problems earlier and let teams focus on product work.

## Personalized experiences

Recommendation engines and adaptive interfaces tailor content to each visitor without hand-written rules.

## What comes next

- Design-to-code generation
- Natural language queries over product data
- Accessibility audits on every commit

The web is becoming *more adaptive*, and developers who understand these tools will shape what it looks like next.";

/// Article for `/blog/:id`.
pub fn article(id: u32) -> Article {
    Article {
        id,
        title: "The Future of Artificial Intelligence in Web Development".to_owned(),
        content: DETAIL_BODY.to_owned(),
        author: "Alex Johnson".to_owned(),
        author_bio: "Senior Full Stack Developer with 8+ years of experience".to_owned(),
        published_at: "2024-01-15T00:00:00Z".to_owned(),
        read_time_minutes: 8,
        thumbnail: PLACEHOLDER.to_owned(),
        likes: 127,
        comments: 23,
        views: 2450,
        tags: owned(&["AI", "Web Development", "Technology", "Future"]),
    }
}

/// Article pre-filled into `/edit-blog/:id`.
pub fn editable_article(id: u32) -> Article {
    Article {
        title: "Getting Started with React and TypeScript".to_owned(),
        content: EDITABLE_BODY.to_owned(),
        author: "John Doe".to_owned(),
        tags: owned(&["React", "TypeScript"]),
        ..article(id)
    }
}

pub fn comments() -> Vec<Comment> {
    (1..=3)
        .map(|id| Comment {
            id,
            author: format!("Reader {id}"),
            body: "Great article! Really insightful perspective on AI in web development.".to_owned(),
            likes: 3 * id,
        })
        .collect()
}

pub fn featured_posts() -> Vec<FeaturedPost> {
    vec![
        FeaturedPost {
            id: 1,
            title: "Building Scalable React Applications with Redux Toolkit",
            author: "John Doe",
            date: "2 days ago",
            image: "/placeholder.svg?height=200&width=300",
            category: "React.js",
            read_time: "5 min read",
        },
        FeaturedPost {
            id: 2,
            title: "Advanced TypeScript/OOP Techniques for Modern Development",
            author: "Jane Smith",
            date: "3 days ago",
            image: "/placeholder.svg?height=200&width=300",
            category: "TypeScript",
            read_time: "8 min read",
        },
        FeaturedPost {
            id: 3,
            title: "Building REST APIs with Node.js and Express Framework",
            author: "Mike Johnson",
            date: "5 days ago",
            image: "/placeholder.svg?height=200&width=300",
            category: "Node.js",
            read_time: "6 min read",
        },
        FeaturedPost {
            id: 4,
            title: "TypeScript Best Practices for Large-Scale Applications",
            author: "Sarah Wilson",
            date: "1 week ago",
            image: "/placeholder.svg?height=200&width=300",
            category: "TypeScript",
            read_time: "7 min read",
        },
    ]
}

pub fn videos() -> Vec<Video> {
    vec![
        Video {
            id: 1,
            title: "React Hooks Deep Dive: useEffect Explained",
            author: "Tech Master",
            views: "15K views",
            duration: "12:45",
            thumbnail: "/placeholder.svg?height=200&width=350",
        },
        Video {
            id: 2,
            title: "Docker for Beginners: Getting Started with Containers",
            author: "DevOps Pro",
            views: "8.2K views",
            duration: "18:30",
            thumbnail: "/placeholder.svg?height=200&width=350",
        },
        Video {
            id: 3,
            title: "TailwindCSS: Build Responsive UI in Minutes",
            author: "CSS Ninja",
            views: "22K views",
            duration: "9:15",
            thumbnail: "/placeholder.svg?height=200&width=350",
        },
    ]
}

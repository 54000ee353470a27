//! Seed posts used when storage holds no valid collection

use chrono::NaiveDate;

use super::{Category, Post};

struct SeedPost {
    id: &'static str,
    title: &'static str,
    category: Category,
    excerpt: &'static str,
    content: &'static str,
    date: (i32, u32, u32),
    author: &'static str,
    image_url: &'static str,
    read_time: &'static str,
}

const PLACEHOLDER_CONTENT: &str = "<p>This is the full content of the blog post. In a real application, this would be much longer and formatted with rich text.</p>";

const AI_TRENDS_CONTENT: &str = r#"<p>Artificial Intelligence continues to evolve at a rapid pace, transforming industries and creating new opportunities for innovation. In this article, we'll explore the most significant AI trends that are shaping the technological landscape in 2023.</p>
<h2>1. Generative AI Goes Mainstream</h2>
<p>Generative AI models like GPT-4 and DALL-E have captured public imagination with their ability to create human-like text, images, and even code. In 2023, we're seeing these technologies being integrated into mainstream products and services, from content creation tools to customer service applications.</p>
<h2>2. AI in Healthcare Advances</h2>
<p>The healthcare industry is witnessing unprecedented advancements through AI applications. From drug discovery to personalized treatment plans, AI is revolutionizing patient care and medical research. Machine learning algorithms are becoming increasingly adept at analyzing medical images, detecting patterns that might escape human observation.</p>
<h2>3. Sustainable AI Initiatives</h2>
<p>As awareness of AI's environmental impact grows, we're seeing a stronger focus on developing energy-efficient algorithms and computing infrastructure. Organizations are increasingly prioritizing sustainable AI practices that reduce carbon footprints while maintaining performance.</p>
<h2>4. Enhanced AI Governance</h2>
<p>With AI's growing influence comes increased scrutiny. Governments and organizations worldwide are developing more robust frameworks for AI governance, addressing concerns around ethics, privacy, and bias. Responsible AI is becoming a key consideration for businesses implementing AI solutions.</p>
<h2>5. AI-Driven Automation Expansion</h2>
<p>Automation powered by AI is extending beyond routine tasks to more complex processes, enabling organizations to optimize operations and redirect human resources to higher-value activities. This trend is particularly evident in manufacturing, logistics, and administrative functions.</p>
<p>As AI continues to evolve, staying informed about these trends is essential for businesses looking to leverage the technology's potential. The organizations that successfully integrate AI into their strategies while addressing the associated challenges will be well-positioned for success in the increasingly competitive digital landscape.</p>"#;

const NONVERBAL_CONTENT: &str = r#"<p>Leadership extends far beyond spoken words. In fact, research suggests that nonverbal communication can account for up to 93% of the meaning conveyed in interpersonal interactions. For leaders, mastering the art of body language is not just beneficial, it's essential.</p>
<h2>The Silent Language of Leadership</h2>
<p>Every gesture, facial expression, and posture communicates something to those around you. As a leader, your nonverbal cues can either reinforce or undermine your verbal message. Understanding this silent language gives you a powerful tool to enhance your leadership effectiveness.</p>
<h2>Building Trust Through Body Language</h2>
<p>Trust is the foundation of effective leadership, and your nonverbal communication plays a crucial role in building it. Maintaining appropriate eye contact, offering an authentic smile, and displaying open posture all signal trustworthiness to your team members.</p>
<h2>Conveying Confidence</h2>
<p>In times of uncertainty, teams look to their leaders for stability and direction. Your body language can project the confidence needed to reassure your team, even when facing challenges. Standing tall, speaking with a measured pace, and using purposeful gestures all communicate confidence and competence.</p>
<h2>Active Listening Through Nonverbal Cues</h2>
<p>Effective leaders are also effective listeners. Your nonverbal behavior during conversations signals whether you're truly engaged or merely waiting for your turn to speak. Nodding appropriately, maintaining eye contact, and leaning slightly forward all demonstrate that you value what others are saying.</p>
<h2>Cultural Considerations</h2>
<p>It's important to recognize that nonverbal communication varies across cultures. What's considered appropriate in one cultural context may be perceived differently in another. Leaders in global organizations must be particularly sensitive to these differences to communicate effectively with diverse teams.</p>
<p>By developing awareness of your own nonverbal communication and learning to read the cues of others, you can significantly enhance your leadership impact. Remember that authenticity is key: your body language should align with your words and values to create a cohesive and trustworthy leadership presence.</p>"#;

static SEED_POSTS: [SeedPost; 6] = [
    SeedPost {
        id: "ai-trends-2023",
        title: "Top AI Trends to Watch in 2023",
        category: Category::Ai,
        excerpt: "Explore the most influential artificial intelligence trends that are shaping industries and transforming how businesses operate.",
        content: AI_TRENDS_CONTENT,
        date: (2023, 6, 15),
        author: "Jane Smith",
        image_url: "https://images.unsplash.com/photo-1677442135309-cc775fcbb539",
        read_time: "5 min read",
    },
    SeedPost {
        id: "nonverbal-communication",
        title: "The Power of Nonverbal Communication in Leadership",
        category: Category::BodyLanguage,
        excerpt: "How understanding and mastering nonverbal cues can significantly improve your effectiveness as a leader.",
        content: NONVERBAL_CONTENT,
        date: (2023, 5, 22),
        author: "John Doe",
        image_url: "https://images.unsplash.com/photo-1557425529-b1ae9c141e7f",
        read_time: "7 min read",
    },
    SeedPost {
        id: "ux-design-principles",
        title: "Essential UX Design Principles Every Developer Should Know",
        category: Category::DevDesign,
        excerpt: "A comprehensive guide to the fundamental UX design principles that can enhance your development projects.",
        content: PLACEHOLDER_CONTENT,
        date: (2023, 4, 10),
        author: "Sarah Johnson",
        image_url: "https://images.unsplash.com/photo-1552664730-d307ca884978",
        read_time: "8 min read",
    },
    SeedPost {
        id: "machine-learning-basics",
        title: "Machine Learning Fundamentals: A Beginner's Guide",
        category: Category::Ai,
        excerpt: "Break down complex machine learning concepts into digestible information for those just starting their AI journey.",
        content: PLACEHOLDER_CONTENT,
        date: (2023, 3, 5),
        author: "Michael Chang",
        image_url: "https://images.unsplash.com/photo-1643116774075-acc00caa9a7b",
        read_time: "10 min read",
    },
    SeedPost {
        id: "reading-facial-expressions",
        title: "How to Accurately Read Facial Expressions in Business Settings",
        category: Category::BodyLanguage,
        excerpt: "Practical tips for interpreting facial expressions to better understand colleagues and clients in professional environments.",
        content: PLACEHOLDER_CONTENT,
        date: (2023, 2, 19),
        author: "Emily Wilson",
        image_url: "https://images.unsplash.com/photo-1573497620053-ea5300f94f21",
        read_time: "6 min read",
    },
    SeedPost {
        id: "responsive-design-techniques",
        title: "Advanced Responsive Design Techniques for Modern Websites",
        category: Category::DevDesign,
        excerpt: "Innovative approaches to creating responsive designs that work seamlessly across all devices and screen sizes.",
        content: PLACEHOLDER_CONTENT,
        date: (2023, 1, 30),
        author: "David Lee",
        image_url: "https://images.unsplash.com/photo-1520333789090-1afc82db536a",
        read_time: "9 min read",
    },
];

/// The fixed default collection, newest first
pub fn default_posts() -> Vec<Post> {
    SEED_POSTS
        .iter()
        .map(|seed| {
            let (y, m, d) = seed.date;
            Post {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                category: seed.category,
                excerpt: seed.excerpt.to_string(),
                content: seed.content.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                author: seed.author.to_string(),
                image_url: seed.image_url.to_string(),
                read_time: Some(seed.read_time.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_unique_posts() {
        let posts = default_posts();
        assert_eq!(posts.len(), 6);
        let ids: HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_two_per_category() {
        let posts = default_posts();
        for category in Category::ALL {
            assert_eq!(posts.iter().filter(|p| p.category == category).count(), 2);
        }
    }

    #[test]
    fn test_dates_are_valid_and_descending() {
        let posts = default_posts();
        assert_eq!(posts[0].date, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert!(posts.windows(2).all(|w| w[0].date > w[1].date));
    }
}

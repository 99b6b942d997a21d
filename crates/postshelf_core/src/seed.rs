//! Example posts written into an empty store on first start.

use crate::model::post::{Post, PostStatus};
use chrono::{DateTime, Utc};

const EDUCATION_BODY: &str = r#"<p>Education is the foundation of transformation. In our work across underserved communities, we've witnessed firsthand how access to quality education can break cycles of poverty and create pathways to brighter futures.</p>

<h2>The Challenge</h2>
<p>Many communities lack access to basic educational resources. Children walk miles to reach the nearest school, often lacking textbooks, supplies, and even qualified teachers. This educational gap perpetuates cycles of poverty and limits opportunities for entire generations.</p>

<h2>Our Approach</h2>
<p>We believe in sustainable, community-driven solutions. Our education programs focus on:</p>
<ul>
  <li>Building and renovating schools in remote areas</li>
  <li>Training and supporting local teachers</li>
  <li>Providing educational materials and technology</li>
  <li>Creating scholarship programs for promising students</li>
  <li>Engaging parents and community leaders</li>
</ul>

<h2>Impact Stories</h2>
<p>Take Maria, a 12-year-old from a rural village who couldn't read when we first met her. Through our literacy program, she not only learned to read but became the top student in her class. Today, she dreams of becoming a teacher to help other children in her community.</p>"#;

const HEALTHCARE_BODY: &str = r#"<p>Healthcare is a fundamental human right, yet millions of people in remote and underserved communities lack access to basic medical services. Our mobile healthcare initiatives are changing this reality, one community at a time.</p>

<h2>The Healthcare Crisis</h2>
<p>In many rural areas, the nearest hospital or clinic can be hours away. Pregnant women give birth without medical assistance, children suffer from preventable diseases, and chronic conditions go untreated.</p>

<h2>Mobile Healthcare Solutions</h2>
<p>Our mobile healthcare clinics bring essential medical services directly to communities that need them most:</p>
<ul>
  <li>Regular health screenings and preventive care</li>
  <li>Maternal and child health services</li>
  <li>Vaccination programs</li>
  <li>Treatment for common illnesses and injuries</li>
  <li>Health education and awareness programs</li>
</ul>"#;

const DEVELOPMENT_BODY: &str = r#"<p>True transformation requires sustainable solutions that communities can maintain long after we leave. Our sustainable development projects focus on building local capacity and creating lasting positive change.</p>

<h2>Beyond Quick Fixes</h2>
<p>While emergency aid is important, sustainable development addresses root causes of poverty and inequality. We work with communities to identify their needs and develop solutions they can own and maintain.</p>"#;

/// Builds the three seed posts (two published, one draft), newest id last.
///
/// `updated_at` is left unset; seeds have never been edited.
pub fn default_posts(created_at: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "Empowering Communities Through Education".to_string(),
            excerpt: "Discover how our education programs are transforming lives in underserved communities, providing hope and opportunities for a brighter future.".to_string(),
            content: EDUCATION_BODY.to_string(),
            image: "https://images.pexels.com/photos/8112198/pexels-photo-8112198.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop".to_string(),
            date: "December 15, 2024".to_string(),
            author: "Sarah Johnson".to_string(),
            slug: "empowering-communities-education".to_string(),
            category: "Education".to_string(),
            status: PostStatus::Published,
            views: 1250,
            featured: true,
            created_at,
            updated_at: None,
        },
        Post {
            id: 2,
            title: "Building Hope Through Healthcare Initiatives".to_string(),
            excerpt: "Learn about our mobile healthcare clinics bringing essential medical services to remote areas, saving lives and building healthier communities.".to_string(),
            content: HEALTHCARE_BODY.to_string(),
            image: "https://images.pexels.com/photos/6975474/pexels-photo-6975474.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop".to_string(),
            date: "December 10, 2024".to_string(),
            author: "Dr. Michael Chen".to_string(),
            slug: "building-hope-healthcare".to_string(),
            category: "Healthcare".to_string(),
            status: PostStatus::Published,
            views: 890,
            featured: false,
            created_at,
            updated_at: None,
        },
        Post {
            id: 3,
            title: "Sustainable Development: Creating Lasting Change".to_string(),
            excerpt: "Explore our sustainable development projects that are creating long-term positive impact in communities around the world.".to_string(),
            content: DEVELOPMENT_BODY.to_string(),
            image: "https://images.pexels.com/photos/6646844/pexels-photo-6646844.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop".to_string(),
            date: "December 5, 2024".to_string(),
            author: "Emma Rodriguez".to_string(),
            slug: "sustainable-development-change".to_string(),
            category: "Development".to_string(),
            status: PostStatus::Draft,
            views: 0,
            featured: false,
            created_at,
            updated_at: None,
        },
    ]
}

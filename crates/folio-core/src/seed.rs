//! Built-in portfolio content.
//!
//! Ids in `experiences()` and `projects()` must stay unique; the dataset
//! tests rebuild this content through `Dataset::new` to check it.

use crate::types::{
    Experience, Profile, Project, RecordId, Skill, SkillCategory, SkillLevel, SocialLink,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub(crate) fn profile() -> Profile {
    Profile {
        name: "ชินกฤต (Chinnakrit Sripan)".to_string(),
        title: "Frontend Developer / Full-stack Developer".to_string(),
        bio: "นักพัฒนา React & Web Developer ที่มีความหลงใหลในการสร้างเว็บไซต์ที่สวยงามและใช้งานได้ดี"
            .to_string(),
        short_bio: "My Portfolio Website to showcase my projects and skills".to_string(),
        image: "https://placehold.co/400x400/000000/FFF?text=Profile".to_string(),
        email: "chinnakrit.srp@gmail.com".to_string(),
        phone: "+66 94 665 0259".to_string(),
        location: "Thailand".to_string(),
        resume: "/Chinnakrit-Sripan_CV.pdf".to_string(),
    }
}

fn category(name: &str, items: &[(&str, SkillLevel)]) -> SkillCategory {
    SkillCategory {
        category: name.to_string(),
        items: items
            .iter()
            .map(|(skill, level)| Skill::new(*skill, *level))
            .collect(),
    }
}

pub(crate) fn skills() -> Vec<SkillCategory> {
    use SkillLevel::{Advanced, Beginner, Intermediate, Native};

    vec![
        category(
            "Frontend",
            &[
                ("React", Advanced),
                ("JavaScript", Advanced),
                ("Tailwind CSS", Advanced),
                ("HTML/CSS", Advanced),
                ("Responsive Design", Advanced),
            ],
        ),
        category(
            "Backend",
            &[
                ("Node.js", Intermediate),
                ("Express.js", Intermediate),
                ("MongoDB", Intermediate),
                ("RESTful API", Intermediate),
            ],
        ),
        category(
            "Tools & Others",
            &[
                ("Git/GitHub", Advanced),
                ("Vite", Advanced),
                ("VS Code", Advanced),
                ("Figma", Intermediate),
                ("Docker", Beginner),
            ],
        ),
        category(
            "Languages",
            &[("Thai", Native), ("English", Intermediate)],
        ),
    ]
}

pub(crate) fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: RecordId(1),
            year: "2024 - Present".to_string(),
            position: "Frontend Developer".to_string(),
            company: "Company Name".to_string(),
            description: "พัฒนา React applications และ web interfaces สำหรับ...".to_string(),
            achievements: strings(&[
                "สร้าง responsive web application ที่ใช้ 50,000+ users",
                "ปรับปรุง performance ลด load time 40%",
                "ทำงานร่วม design team เพื่อ implement UI/UX designs",
            ]),
        },
        Experience {
            id: RecordId(2),
            year: "2023 - 2024".to_string(),
            position: "Junior Web Developer".to_string(),
            company: "Previous Company".to_string(),
            description: "ปฏิบัติงานเป็น junior developer ทำ...".to_string(),
            achievements: strings(&[
                "พัฒนา features ใหม่ ๆ เพื่อ web application",
                "ทำ unit testing และ integration testing",
                "ช่วย debug และ fix bugs ในโปรแกรม",
            ]),
        },
        Experience {
            id: RecordId(3),
            year: "2022 - 2023".to_string(),
            position: "Internship".to_string(),
            company: "Internship Company".to_string(),
            description: "ได้เรียนรู้ web development fundamentals".to_string(),
            achievements: strings(&[
                "จบ internship program successfully",
                "ทำโปรเจคจบปริญญา",
                "ได้รับ certificate",
            ]),
        },
    ]
}

pub(crate) fn projects() -> Vec<Project> {
    vec![
        Project {
            id: RecordId(1),
            title: "CS Logbook System".to_string(),
            description: "ระบบบันทึกงานภาควิชาสำหรับนักศึกษา".to_string(),
            long_description: "ระบบการบันทึกงาน (Logbook) ที่ออกแบบมาสำหรับนักศึกษาภาควิชา"
                .to_string(),
            tech: strings(&["React", "MongoDB", "Node.js", "Express", "Tailwind CSS"]),
            image: "https://placehold.co/600x400/3b82f6/ffffff?text=CS+Logbook".to_string(),
            github: "https://github.com/yourusername/cs-logbook".to_string(),
            demo: "https://cs-logbook-demo.vercel.app".to_string(),
            date: "2024".to_string(),
            highlights: strings(&[
                "ออกแบบ database schema",
                "สร้าง authentication system",
                "ทำ dashboard สำหรับแสดงผลสถิติ",
            ]),
        },
        Project {
            id: RecordId(2),
            title: "Shoe Store E-commerce".to_string(),
            description: "เว็บร้านขายรองเท้าออนไลน์".to_string(),
            long_description: "โปรเจคเว็บ e-commerce สำหรับขายรองเท้า".to_string(),
            tech: strings(&["React", "Stripe API", "MongoDB", "Node.js", "Tailwind CSS"]),
            image: "https://placehold.co/600x400/f59e0b/000000?text=Shoe+Store".to_string(),
            github: "https://github.com/yourusername/shoe-store".to_string(),
            demo: "https://shoe-store-demo.vercel.app".to_string(),
            date: "2024".to_string(),
            highlights: strings(&[
                "ชำระเงินผ่าน Stripe",
                "ระบบ cart และ checkout",
                "ระบบจัดการ inventory",
            ]),
        },
        Project {
            id: RecordId(3),
            title: "Personal Portfolio Website".to_string(),
            description: "เว็บแนะนำตัวสไตล์ Neo-Brutalism".to_string(),
            long_description: "โปรเจค Portfolio ส่วนตัวที่ออกแบบด้วย Neo-Brutalism style"
                .to_string(),
            tech: strings(&["React", "Tailwind CSS", "Vite", "React Router"]),
            image: "https://placehold.co/600x400/ec4899/ffffff?text=Portfolio".to_string(),
            github: "https://github.com/yourusername/portfolio".to_string(),
            demo: "https://your-portfolio.vercel.app".to_string(),
            date: "2024".to_string(),
            highlights: strings(&[
                "Responsive design",
                "Smooth scrolling",
                "Contact form",
                "SEO optimized",
            ]),
        },
    ]
}

fn social(name: &str, url: &str, icon: &str, color: &str) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

pub(crate) fn socials() -> Vec<SocialLink> {
    vec![
        social(
            "GitHub",
            "https://github.com/Manchinn",
            "github",
            "hover:text-gray-800",
        ),
        social(
            "LinkedIn",
            "https://linkedin.com/in/chinnakrit-sripan-4674a436a",
            "linkedin",
            "hover:text-blue-600",
        ),
        social(
            "Email",
            "mailto:chinnakrit.srp@gmail.com",
            "mail",
            "hover:text-red-600",
        ),
        social("Phone", "tel:+66946650259", "phone", "hover:text-green-600"),
        social(
            "Twitter",
            "https://twitter.com/Manchinn",
            "twitter",
            "hover:text-blue-400",
        ),
    ]
}

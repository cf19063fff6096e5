//! Static copy for the landing page.

pub const OWNER_NAME: &str = "Victor Martins";
pub const OWNER_ROLE: &str = "Full Stack Developer";
pub const OWNER_TAGLINE: &str = "Building modern web applications with passion and precision";
pub const CONTACT_EMAIL: &str = "vmhugo00@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Page sections in scroll order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "stack", label: "Stack" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub kind: SocialKind,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        kind: SocialKind::GitHub,
        url: "https://github.com/victormrtns",
    },
    SocialLink {
        name: "LinkedIn",
        kind: SocialKind::LinkedIn,
        url: "https://www.linkedin.com/in/victor-hugo-a847b21b7/",
    },
    SocialLink {
        name: "Email",
        kind: SocialKind::Email,
        url: "mailto:vmhugo00@gmail.com",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology {
        name: "React",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/react/react-original.svg",
        description: "Web Development",
    },
    Technology {
        name: "React Native",
        icon: "https://cdn.worldvectorlogo.com/logos/react-native-1.svg",
        description: "Mobile Development",
    },
    Technology {
        name: "Nest.js",
        icon: "https://nestjs.com/img/logo-small.svg",
        description: "Backend Development",
    },
    Technology {
        name: "Node.js",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/nodejs/nodejs-original.svg",
        description: "Runtime Environment",
    },
    Technology {
        name: ".NET",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/dot-net/dot-net-original.svg",
        description: "Backend Development",
    },
    Technology {
        name: "TypeScript",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
        description: "Development Language",
    },
    Technology {
        name: "AWS",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/amazonwebservices/amazonwebservices-original-wordmark.svg",
        description: "Cloud Services",
    },
    Technology {
        name: "Docker",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg",
        description: "Containerization",
    },
    Technology {
        name: "Figma",
        icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg",
        description: "UI/UX Design",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ProjectLink {
    pub name: &'static str,
    pub url: &'static str,
    /// Source repository rather than a live deployment.
    pub is_repo: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub links: &'static [ProjectLink],
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Kanban Board Application",
        description: "Full-stack Kanban board application with drag-and-drop functionality. Features include user authentication, real-time board management, and card organization. Built with a React frontend and Spring backend for robust task management.",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?q=80&w=1000&h=600&fit=crop",
        links: &[
            ProjectLink {
                name: "Frontend Repository",
                url: "https://github.com/victormrtns/kanban-front-react",
                is_repo: true,
            },
            ProjectLink {
                name: "Backend Repository",
                url: "https://github.com/victormrtns/kanban-spring-api",
                is_repo: true,
            },
        ],
        technologies: &["React", "Material UI", "Spring Boot", "JWT", "PostgreSQL", "Docker"],
    },
    Project {
        title: "UNL Vaccination Wallet",
        description: "A web application for generating vaccination wallets tailored for Brazilian women. Users can save and manage vaccination records and generate PDF versions of their vaccination wallet anytime.",
        image: "https://images.unsplash.com/photo-1584118624012-df056829fbd0?q=80&w=1000&h=600&fit=crop",
        links: &[
            ProjectLink {
                name: "GitHub Repository",
                url: "https://github.com/victormrtns/frontend-site-UNL",
                is_repo: true,
            },
            ProjectLink {
                name: "Live Demo",
                url: "https://carteirinhavacinacaounl.netlify.app/",
                is_repo: false,
            },
        ],
        technologies: &["React", "React Router", "TailwindCSS", "LocalStorage"],
    },
    Project {
        title: "Star Wars API Consumer",
        description: "React application that consumes the Star Wars API (SWAPI) to display information about the Star Wars universe. Features a clean Material UI interface and efficient data fetching.",
        image: "https://images.unsplash.com/photo-1472457897821-70d3819a0e24?q=80&w=1000&h=600&fit=crop",
        links: &[ProjectLink {
            name: "GitHub Repository",
            url: "https://github.com/victormrtns/smartnx-frontend-challenge",
            is_repo: true,
        }],
        technologies: &["React", "Material UI", "Vite", "JavaScript"],
    },
    Project {
        title: "MKS Films API",
        description: "RESTful API for managing films with authentication and caching. Built with NestJS and TypeScript, featuring Redis caching and JWT authentication for secure and efficient data handling.",
        image: "https://images.unsplash.com/photo-1485846234645-a62644f84728?q=80&w=1000&h=600&fit=crop",
        links: &[ProjectLink {
            name: "GitHub Repository",
            url: "https://github.com/victormrtns/mks-backend-challenge",
            is_repo: true,
        }],
        technologies: &["NestJS", "TypeScript", "Redis", "PostgreSQL", "Docker", "Swagger"],
    },
    Project {
        title: "Events Management API",
        description: "A comprehensive REST API built with NestJS for managing events and attendees. Includes user authentication and MySQL database integration for reliable data storage.",
        image: "https://images.unsplash.com/photo-1511578314322-379afb476865?q=80&w=1000&h=600&fit=crop",
        links: &[ProjectLink {
            name: "GitHub Repository",
            url: "https://github.com/victormrtns/nest-events-api",
            is_repo: true,
        }],
        technologies: &["NestJS", "TypeScript", "MySQL", "Docker", "TypeORM"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nav_ids_are_unique() {
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
        assert_eq!(NAV_ITEMS[0].id, "home");
    }
}

use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide palette, typography and layout utilities. Per-element motion is
/// applied inline by the components.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <>
        // Mount entrances; the start state comes from `Motion::entrance`.
        <style>
            {r#"
            @keyframes enter {
                from {
                    opacity: var(--enter-opacity);
                    transform: var(--enter-transform);
                }
            }
            "#}
        </style>
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                background: #f8f9fb;
                color: #4a5563;
                font-family: "Public Sans", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
            }

            h1, h2, h3, h4 {
                color: #1f2a37;
                margin: 0;
            }

            a {
                color: inherit;
                text-decoration: none;
            }

            .container {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.5rem;
            }

            .container.narrow {
                max-width: 48rem;
            }

            .icon { width: 1.5rem; height: 1.5rem; }
            .icon-sm { width: 1.25rem; height: 1.25rem; color: #7a8b9c; }
            .icon-lg { width: 2rem; height: 2rem; color: #7a8b9c; }
            .icon-xl { width: 3rem; height: 3rem; color: #7a8b9c; }

            .btn {
                display: inline-block;
                border: none;
                border-radius: 0.75rem;
                padding: 0.5rem 1.5rem;
                font-weight: 600;
                cursor: pointer;
                transition: transform 0.2s ease-out, box-shadow 0.2s ease-out, background 0.2s;
            }

            .btn:hover {
                transform: scale(1.05);
                box-shadow: 0 10px 15px -3px rgba(204, 78, 58, 0.3);
            }

            .btn:active {
                transform: scale(0.95);
            }

            .btn-accent {
                background: #cc4e3a;
                color: #ffffff;
            }

            .btn-accent:hover {
                background: #b03f2d;
            }

            .btn-large {
                padding: 1rem 2rem;
                font-size: 1.125rem;
            }

            .btn-block {
                width: 100%;
                padding: 1rem 1.5rem;
            }

            .btn-block:hover {
                transform: scale(1.02);
            }

            .top-nav {
                position: fixed;
                top: 0;
                width: 100%;
                z-index: 50;
                background: rgba(255, 255, 255, 0.8);
                backdrop-filter: blur(4px);
                border-bottom: 1px solid #f3f4f6;
            }

            .nav-content {
                display: flex;
                justify-content: space-between;
                align-items: center;
                height: 5rem;
            }

            .nav-logo {
                font-size: 1.5rem;
                font-weight: 700;
                color: #7a8b9c;
            }

            .nav-links {
                display: flex;
                align-items: center;
                gap: 2rem;
            }

            .nav-link:hover, .mobile-link:hover, .footer-list a:hover {
                color: #7a8b9c;
            }

            .burger-menu {
                display: none;
                background: none;
                border: none;
                color: inherit;
                cursor: pointer;
            }

            .mobile-menu {
                display: none;
                background: #ffffff;
                border-top: 1px solid #f3f4f6;
            }

            .mobile-menu-inner, .faq-answer-inner {
                min-height: 0;
                overflow: hidden;
            }

            .mobile-menu-inner {
                display: flex;
                flex-direction: column;
                gap: 0.25rem;
                padding: 0 1rem;
            }

            .mobile-link {
                padding: 0.5rem 0.75rem;
            }

            .hero {
                position: relative;
                overflow: hidden;
                padding: 10rem 0 8rem;
            }

            .hero-backdrop {
                position: absolute;
                inset: 0;
                pointer-events: none;
                background: linear-gradient(135deg, rgba(122, 139, 156, 0.05), transparent);
            }

            .hero-inner {
                position: relative;
            }

            .hero-copy {
                text-align: center;
                max-width: 56rem;
                margin: 0 auto;
            }

            .hero h1 {
                font-size: 4.5rem;
                line-height: 1.1;
                margin-bottom: 2rem;
            }

            .hero-subtitle {
                font-size: 1.5rem;
                line-height: 1.6;
                margin-bottom: 3rem;
            }

            .section {
                padding: 6rem 0;
            }

            .section-white {
                background: #ffffff;
            }

            .section-tinted {
                background: rgba(122, 139, 156, 0.05);
            }

            .section-title {
                font-size: 3rem;
                text-align: center;
                margin-bottom: 1.5rem;
            }

            .section-title.align-left {
                text-align: left;
            }

            .section-subtitle {
                font-size: 1.25rem;
                text-align: center;
                max-width: 42rem;
                margin: 0 auto 4rem;
            }

            .grid {
                display: grid;
                gap: 2rem;
            }

            .grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
            .grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
            .grid-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }

            .service-card {
                position: relative;
                padding: 2.5rem;
                border-radius: 1rem;
                background: #f8f9fb;
                height: 100%;
                box-sizing: border-box;
            }

            .card-tint {
                position: absolute;
                inset: 0;
                border-radius: 1rem;
                background: rgba(122, 139, 156, 0.05);
            }

            .card-body {
                position: relative;
            }

            .card-icon {
                margin-bottom: 1.5rem;
                transition: transform 0.2s ease-out;
            }

            .service-card:hover .card-icon, .step-disc:hover {
                transform: scale(1.1);
            }

            .service-card h3 {
                font-size: 1.5rem;
                margin-bottom: 1rem;
            }

            .step {
                text-align: center;
            }

            .step-disc {
                width: 4rem;
                height: 4rem;
                border-radius: 50%;
                background: #ffffff;
                display: flex;
                align-items: center;
                justify-content: center;
                margin: 0 auto 1.5rem;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                transition: transform 0.2s ease-out, box-shadow 0.2s ease-out;
            }

            .about-grid {
                align-items: center;
                gap: 3rem;
            }

            .lead {
                font-size: 1.25rem;
                margin-bottom: 2rem;
            }

            .body-copy {
                font-size: 1.125rem;
                line-height: 1.7;
                margin-bottom: 2rem;
            }

            .feature-grid {
                gap: 1.5rem;
            }

            .feature {
                display: flex;
                gap: 1rem;
                align-items: flex-start;
            }

            .feature p {
                font-size: 0.875rem;
            }

            .about-picture {
                position: relative;
            }

            .about-overlay {
                position: absolute;
                inset: 0;
                border-radius: 1rem;
                background: linear-gradient(135deg, rgba(122, 139, 156, 0.1), transparent);
            }

            .about-picture img {
                width: 100%;
                height: 600px;
                object-fit: cover;
                border-radius: 1rem;
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
            }

            .faq-list {
                max-width: 48rem;
                margin: 0 auto;
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }

            .faq-item {
                background: #ffffff;
                border: 1px solid #f3f4f6;
                border-radius: 0.75rem;
                overflow: hidden;
            }

            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 1.5rem 2rem;
                background: none;
                border: none;
                text-align: left;
                font: inherit;
                font-weight: 600;
                color: #1f2a37;
                cursor: pointer;
            }

            .faq-question:hover {
                background: rgba(122, 139, 156, 0.05);
            }

            .chevron {
                display: inline-flex;
            }

            .faq-answer {
                display: grid;
            }

            .faq-answer-inner p {
                margin: 0;
                padding: 1.5rem 2rem;
                border-top: 1px solid #f3f4f6;
                line-height: 1.7;
            }

            .contact-form {
                display: flex;
                flex-direction: column;
                gap: 1.5rem;
            }

            .field {
                display: block;
            }

            .field-label {
                display: block;
                font-size: 0.875rem;
                font-weight: 500;
                color: #1f2a37;
                margin-bottom: 0.5rem;
            }

            .field input, .field select, .field textarea {
                width: 100%;
                box-sizing: border-box;
                padding: 0.75rem 1rem;
                border-radius: 0.75rem;
                border: 1px solid #e5e7eb;
                font: inherit;
            }

            .site-footer {
                background: rgba(122, 139, 156, 0.05);
                border-top: 1px solid #f3f4f6;
                padding: 4rem 0;
            }

            .site-footer h4 {
                margin-bottom: 1.5rem;
            }

            .footer-list {
                list-style: none;
                padding: 0;
                margin: 0;
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }

            .contact-detail {
                display: flex;
                align-items: center;
                gap: 0.5rem;
            }

            .footer-bottom {
                border-top: 1px solid #e5e7eb;
                margin-top: 3rem;
                padding-top: 2rem;
                text-align: center;
            }

            @media (max-width: 768px) {
                .nav-links {
                    display: none;
                }

                .burger-menu {
                    display: flex;
                }

                .mobile-menu {
                    display: grid;
                }

                .hero h1 {
                    font-size: 3rem;
                }

                .grid-2, .grid-3, .grid-4 {
                    grid-template-columns: 1fr;
                }
            }
        "#)} />
        </>
    }
}

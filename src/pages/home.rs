use yew::prelude::*;
use gloo_console::log;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;

use crate::activation::ViewportActivation;
use crate::components::contact_form::ContactForm;
use crate::config;

const BRANDS: &[(&str, &str, &str)] = &[
    (
        "Terravita Academy",
        "/images/brands/terravita-academy.png",
        "Therapeutic nutrition programs for chronic conditions",
    ),
    (
        "The Reset Clinic",
        "/images/brands/reset-clinic.png",
        "Supervised detox and metabolic renewal protocols",
    ),
    (
        "Halewood Bakehouse",
        "/images/brands/halewood-bakehouse.png",
        "Gut-friendly breads for digestive health and inflammation",
    ),
    (
        "Lumen Botanica",
        "/images/brands/lumen-botanica.png",
        "Clean skincare formulated for mature skin",
    ),
];

const EXPERTS: &[(&str, &str, &str, &str)] = &[
    (
        "Dr. Maren Ostrovski",
        "Nutritional Biochemistry",
        "Leads our research in cellular nutrition and metabolic health",
        "/images/experts/maren-ostrovski.jpg",
    ),
    (
        "Prof. Daniel Ng",
        "Food Science & Safety",
        "Expert in food toxicology and residue testing protocols",
        "/images/experts/daniel-ng.jpg",
    ),
    (
        "Dr. Amelia Suraya",
        "Chronic Disease Nutrition",
        "Designs our therapeutic nutrition programs",
        "/images/experts/amelia-suraya.jpg",
    ),
    (
        "Dr. Tomas Reyes",
        "Cellular Health",
        "Pioneer of our detoxification and renewal protocols",
        "/images/experts/tomas-reyes.jpg",
    ),
];

const AWARDS: &[(&str, &str)] = &[
    ("Singapore Quality Service Award", "/images/awards/quality-service.png"),
    ("Best in Food Safety Solutions", "/images/awards/food-safety.jpg"),
    ("HACCP Certified", "/images/awards/haccp.jpg"),
    ("GMP Certified", "/images/awards/gmp.jpg"),
    ("Clean Label Partnership", "/images/awards/clean-label.png"),
    ("Accredited Course Provider", "/images/awards/course-provider.png"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let hero_video_ref = use_node_ref();
    let hero_video_ready = use_state(|| false);

    let testimonial_one = use_node_ref();
    let testimonial_two = use_node_ref();
    let testimonial_three = use_node_ref();

    // Hero background video: load and autoplay, fading in only once playback
    // actually starts. Autoplay can be refused (low-power mode, data saver);
    // the poster stays up in that case.
    {
        let hero_video_ref = hero_video_ref.clone();
        let hero_video_ready = hero_video_ready.clone();
        use_effect_with_deps(
            move |_| {
                let video = hero_video_ref.cast::<HtmlVideoElement>();
                if let Some(video) = video.clone() {
                    video.set_src(&config::asset_path("/videos/hero-loop.mp4"));
                    video.set_preload("auto");
                    video.load();
                    video.set_loop(true);
                    video.set_muted(true);
                    let _ = video.set_attribute("playsinline", "");

                    match video.play() {
                        Ok(promise) => {
                            let hero_video_ready = hero_video_ready.clone();
                            spawn_local(async move {
                                match JsFuture::from(promise).await {
                                    Ok(_) => hero_video_ready.set(true),
                                    Err(err) => log!("hero video autoplay failed", err),
                                }
                            });
                        }
                        Err(err) => log!("hero video play() failed", err),
                    }
                }
                move || {
                    if let Some(video) = video {
                        let _ = video.pause();
                        video.set_src("");
                    }
                }
            },
            (),
        );
    }

    // Reveal animations and stat counters for everything below the hero.
    use_effect_with_deps(
        move |_| {
            let engine = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|document| ViewportActivation::mount(&document));
            move || drop(engine)
        },
        (),
    );

    // Only one testimonial plays at a time.
    let on_testimonial_play = {
        let players = [
            testimonial_one.clone(),
            testimonial_two.clone(),
            testimonial_three.clone(),
        ];
        Callback::from(move |playing: usize| {
            for (index, player) in players.iter().enumerate() {
                if index == playing {
                    continue;
                }
                if let Some(video) = player.cast::<HtmlVideoElement>() {
                    if !video.paused() {
                        let _ = video.pause();
                    }
                }
            }
        })
    };

    let play_first = {
        let cb = on_testimonial_play.clone();
        Callback::from(move |_: Event| cb.emit(0))
    };
    let play_second = {
        let cb = on_testimonial_play.clone();
        Callback::from(move |_: Event| cb.emit(1))
    };
    let play_third = {
        let cb = on_testimonial_play.clone();
        Callback::from(move |_: Event| cb.emit(2))
    };

    let hero_video_class = if *hero_video_ready {
        "hero-video playing"
    } else {
        "hero-video"
    };

    html! {
        <div class="home-page">
            // Hero
            <section id="home" class="hero">
                <div class="hero-backdrop">
                    <video
                        ref={hero_video_ref}
                        class={hero_video_class}
                        poster={config::asset_path("/images/hero-poster.jpg")}
                    />
                    <div class="hero-overlay"></div>
                </div>

                <div class="hero-content">
                    <h1>
                        {"Transforming Health Through"}
                        <br />
                        <span class="hero-highlight">
                            {"Community, Food Safety, Research & Innovation"}
                        </span>
                    </h1>
                    <p class="hero-subtitle">
                        {"We are a research-driven, community-centered holding company powering Asia's trusted wellness brands."}
                    </p>
                    <p class="hero-tagline">
                        {"Clean, science-backed solutions built for the modern Asian lifestyle."}
                    </p>

                    <div class="mission-card">
                        <h3>{"Our Mission: Nourish 1 Million School Children by 2028"}</h3>
                        <div class="mission-stats">
                            <div class="mission-stat">
                                <div class="stat-value">
                                    <span class="count-up" data-target="250000">{"0"}</span>{"+"}
                                </div>
                                <div class="stat-label">{"Children Nourished"}</div>
                            </div>
                            <div class="mission-divider"></div>
                            <div class="mission-stat">
                                <div class="stat-value">
                                    <span class="count-up" data-target="25">{"0"}</span>{"%"}
                                </div>
                                <div class="stat-label">{"Progress"}</div>
                            </div>
                        </div>
                        <div class="mission-progress">
                            <div class="mission-progress-fill" style="width: 25%;"></div>
                        </div>
                    </div>

                    <div class="hero-cta-group">
                        <a href="#brands" class="hero-cta primary">{"Explore Our Brands"}</a>
                        <a href="#research" class="hero-cta outline">{"Learn About Our Research"}</a>
                    </div>
                </div>

                <div class="scroll-indicator">{"↓"}</div>
            </section>

            // About
            <section id="about" class="page-section fade-in-up">
                <div class="section-inner">
                    <h2>{"Who We Are"}</h2>
                    <p class="section-lead">
                        {"Terravita Group is a research and education house committed to advancing food safety, wellness innovation and nutrition science. At our core we are a community-first organization driving Asia's clean-health transformation."}
                    </p>
                    <p class="section-lead">
                        {"We invest in R&D, scientific education and ethical product development to empower individuals, practitioners and franchise partners. Under our umbrella we power four purpose-driven brands, each solving a critical health challenge of our time."}
                    </p>

                    <h3 class="subsection-title">{"Core Values"}</h3>
                    <div class="card-grid three">
                        <div class="value-card">
                            <img src={config::asset_path("/images/values/evidence.jpg")} alt="Evidence-based innovation" loading="lazy" />
                            <h4>{"Evidence-based Innovation"}</h4>
                            <p>{"Progress through validated research, not trends."}</p>
                        </div>
                        <div class="value-card">
                            <img src={config::asset_path("/images/values/community.jpg")} alt="Community transformation" loading="lazy" />
                            <h4>{"Community Transformation"}</h4>
                            <p>{"Healthier communities through education and empowerment."}</p>
                        </div>
                        <div class="value-card">
                            <img src={config::asset_path("/images/values/food-first.jpg")} alt="Food-first health" loading="lazy" />
                            <h4>{"Food-first Health"}</h4>
                            <p>{"Nutrition as the foundation of holistic wellness."}</p>
                        </div>
                    </div>
                </div>
            </section>

            // Brands
            <section id="brands" class="page-section alt fade-in-up">
                <div class="section-inner">
                    <h2>{"Our Family of Wellness Brands"}</h2>
                    <p class="section-lead">
                        {"Each brand under Terravita serves a unique mission, built on science, ethics and life-changing outcomes."}
                    </p>
                    <div class="card-grid four">
                        {
                            BRANDS.iter().map(|&(name, image, blurb)| html! {
                                <div key={name} class="brand-card">
                                    <div class="brand-logo">
                                        <img src={config::asset_path(image)} alt={name} loading="lazy" />
                                    </div>
                                    <h3>{name}</h3>
                                    <p>{blurb}</p>
                                    <span class="brand-more">{"Learn More →"}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Awards & recognition
            <section id="awards" class="page-section fade-in-up">
                <div class="section-inner">
                    <h2>{"Global Recognition & Industry Trust"}</h2>
                    <p class="section-lead">
                        {"International media attention and industry awards for our impact in food safety, transformation programs and wellness education."}
                    </p>

                    <div class="media-strip">
                        <h3 class="subsection-title">{"Featured In Global Media"}</h3>
                        <div class="media-track">
                            {
                                // Doubled so the marquee loops seamlessly.
                                (0..22).map(|idx| {
                                    let n = (idx % 11) + 1;
                                    html! {
                                        <img
                                            key={idx}
                                            src={config::asset_path(&format!("/images/media/{:02}.jpg", n))}
                                            alt={format!("Media feature {}", n)}
                                            loading="lazy"
                                        />
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="award-grid">
                        {
                            AWARDS.iter().map(|&(name, image)| html! {
                                <div key={name} class="award-item">
                                    <img src={config::asset_path(image)} alt={name} loading="lazy" />
                                    <p>{name}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Research & education
            <section id="research" class="page-section alt fade-in-up">
                <div class="section-inner">
                    <h2>{"Where Science Meets Public Wellness"}</h2>
                    <p class="section-lead">
                        {"Every decision we make is rooted in data, education and prevention. From our labs to your kitchen table, we translate research into real-world health outcomes."}
                    </p>
                    <div class="card-grid three">
                        <div class="research-card">
                            <img src={config::asset_path("/images/research/food-safety-testing.jpg")} alt="Food safety testing" loading="lazy" />
                            <h3>{"Toxicology & Food Safety Testing"}</h3>
                            <p>{"Analysis and testing protocols upholding the highest standards of quality control."}</p>
                        </div>
                        <div class="research-card">
                            <img src={config::asset_path("/images/research/gut-health.jpg")} alt="Gut health protocols" loading="lazy" />
                            <h3>{"Detoxification & Gut Health Protocols"}</h3>
                            <p>{"Research-backed programs that optimize digestion and support natural detoxification."}</p>
                        </div>
                        <div class="research-card">
                            <img src={config::asset_path("/images/research/workshops.jpg")} alt="Nutrition workshops" loading="lazy" />
                            <h3>{"Nutrition Workshops"}</h3>
                            <p>{"Education for public audiences and healthcare professionals alike."}</p>
                        </div>
                    </div>
                </div>
            </section>

            // Experts
            <section id="experts" class="page-section fade-in-up">
                <div class="section-inner">
                    <h2>{"Experts Behind Our Innovation"}</h2>
                    <p class="section-lead">
                        {"A panel of medical professionals, nutritionists, toxicologists and wellness educators guides the science behind every product, program and protocol."}
                    </p>
                    <div class="card-grid four">
                        {
                            EXPERTS.iter().map(|&(name, field, blurb, image)| html! {
                                <div key={name} class="expert-card">
                                    <img src={config::asset_path(image)} alt={name} loading="lazy" />
                                    <h3>{name}</h3>
                                    <p class="expert-field">{field}</p>
                                    <p>{blurb}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            // Success stories
            <section id="stories" class="page-section alt fade-in-up">
                <div class="section-inner">
                    <h2>{"Real People. Real Results."}</h2>
                    <p class="section-lead">
                        {"From reversing chronic conditions to life-changing weight loss, our brands have helped over 100,000 people live healthier, toxin-free lives."}
                    </p>

                    <h3 class="subsection-title">{"Video Testimonials"}</h3>
                    <div class="card-grid three">
                        <div class="testimonial-card">
                            <video
                                ref={testimonial_one}
                                src={config::asset_path("/videos/testimonials/mei-lin.mp4")}
                                poster={config::asset_path("/images/testimonials/mei-lin.jpg")}
                                controls=true
                                preload="metadata"
                                onplay={play_first}
                            />
                            <h4>{"Mei Lin's Journey"}</h4>
                            <p>{"\"My weight was a yo-yo for a decade. Eighteen months on and I've kept every kilo off.\""}</p>
                        </div>
                        <div class="testimonial-card">
                            <video
                                ref={testimonial_two}
                                src={config::asset_path("/videos/testimonials/harjit.mp4")}
                                poster={config::asset_path("/images/testimonials/harjit.jpg")}
                                controls=true
                                preload="metadata"
                                onplay={play_second}
                            />
                            <h4>{"Harjit's Reset"}</h4>
                            <p>{"\"When my son asked me to make him green juice, I knew the whole family had changed.\""}</p>
                        </div>
                        <div class="testimonial-card">
                            <video
                                ref={testimonial_three}
                                src={config::asset_path("/videos/testimonials/rosa-and-ben.mp4")}
                                poster={config::asset_path("/images/testimonials/rosa-and-ben.jpg")}
                                controls=true
                                preload="metadata"
                                onplay={play_third}
                            />
                            <h4>{"Rosa & Ben's Story"}</h4>
                            <p>{"\"After the detox my blood pressure dropped and my doctor halved my medication.\""}</p>
                        </div>
                    </div>

                    <h3 class="subsection-title">{"Community Transformations"}</h3>
                    <div class="community-stats">
                        <div class="community-stat">
                            <div class="stat-value">
                                <span class="count-up" data-target="100000" data-suffix="+">{"0"}</span>
                            </div>
                            <p>{"Lives Transformed"}</p>
                        </div>
                        <div class="community-stat">
                            <div class="stat-value">
                                <span class="count-up" data-target="85" data-suffix="%">{"0"}</span>
                            </div>
                            <p>{"Program Completion"}</p>
                        </div>
                        <div class="community-stat">
                            <div class="stat-value">
                                <span class="count-up" data-target="12" data-suffix="+">{"0"}</span>
                            </div>
                            <p>{"Countries Reached"}</p>
                        </div>
                    </div>
                </div>
            </section>

            // Get involved
            <section id="join" class="page-section fade-in-up">
                <div class="section-inner">
                    <h2>{"Join Our Movement"}</h2>
                    <p class="section-lead">
                        {"Be part of Asia's clean-health revolution. Whether you're a health enthusiast, a practitioner or an aspiring entrepreneur, there is a place for you."}
                    </p>
                    <div class="card-grid three">
                        <div class="join-card">
                            <h3>{"Become a Franchise Partner"}</h3>
                            <p>{"Bring our proven wellness programs to your community."}</p>
                        </div>
                        <div class="join-card">
                            <h3>{"Join a Health Challenge"}</h3>
                            <p>{"Community-driven challenges that kick-start your own transformation."}</p>
                        </div>
                        <div class="join-card">
                            <h3>{"Volunteer at Our Events"}</h3>
                            <p>{"Support our outreach programs and school nutrition drives."}</p>
                        </div>
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="page-section alt fade-in-up">
                <div class="section-inner">
                    <h2>{"Let's Connect"}</h2>
                    <p class="section-lead">
                        {"Have a question, partnership idea or media request? Our team is ready to help."}
                    </p>
                    <div class="contact-layout">
                        <div class="contact-form-panel">
                            <h3>{"General Inquiry"}</h3>
                            <ContactForm />
                        </div>
                        <div class="contact-side">
                            <div class="contact-panel">
                                <h3>{"Brand Contacts"}</h3>
                                <div class="contact-entry">
                                    <h4>{"Terravita Academy"}</h4>
                                    <p>{"academy@terravitagroup.com"}</p>
                                </div>
                                <div class="contact-entry">
                                    <h4>{"The Reset Clinic"}</h4>
                                    <p>{"clinic@terravitagroup.com"}</p>
                                </div>
                                <div class="contact-entry">
                                    <h4>{"Halewood Bakehouse"}</h4>
                                    <p>{"hello@halewoodbakehouse.com"}</p>
                                </div>
                            </div>
                            <div class="contact-panel">
                                <h3>{"Media & Corporate"}</h3>
                                <div class="contact-entry">
                                    <h4>{"Media Relations"}</h4>
                                    <p>{"media@terravitagroup.com"}</p>
                                </div>
                                <div class="contact-entry">
                                    <h4>{"Partnerships"}</h4>
                                    <p>{"partnerships@terravitagroup.com"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                    .home-page {
                        font-family: 'Halcyon', system-ui, -apple-system, sans-serif;
                        color: #2b2b2b;
                    }

                    .home-page h2 {
                        font-size: 2.4rem;
                        text-align: center;
                        margin: 0 0 1rem 0;
                        color: #1f3a2c;
                    }

                    .section-lead {
                        font-size: 1.15rem;
                        line-height: 1.7;
                        color: #5c5247;
                        max-width: 760px;
                        margin: 0 auto 1.2rem auto;
                        text-align: center;
                    }

                    .subsection-title {
                        font-size: 1.5rem;
                        text-align: center;
                        margin: 3rem 0 1.5rem 0;
                        color: #1f3a2c;
                    }

                    /* Reveal-on-scroll sections start hidden and slide up once
                       the activation engine marks them revealed. */
                    .fade-in-up {
                        opacity: 0;
                        transform: translateY(28px);
                    }

                    .fade-in-up.revealed {
                        opacity: 1;
                        transform: translateY(0);
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }

                    @media (prefers-reduced-motion: reduce) {
                        .fade-in-up {
                            opacity: 1;
                            transform: none;
                        }
                    }

                    .page-section {
                        padding: 5.5rem 0;
                        background: #faf8f4;
                    }

                    .page-section.alt {
                        background: #f1ede5;
                    }

                    .section-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: #ffffff;
                        background: #1f5c40;
                        overflow: hidden;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                    }

                    .hero-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0;
                        transition: opacity 0.7s ease;
                    }

                    .hero-video.playing {
                        opacity: 1;
                    }

                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(31, 92, 64, 0.55);
                    }

                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 880px;
                        padding: 7rem 2rem 5rem 2rem;
                    }

                    .hero-content h1 {
                        font-size: 3.2rem;
                        line-height: 1.2;
                        margin: 0 0 1.5rem 0;
                        font-weight: 700;
                    }

                    .hero-highlight {
                        background: linear-gradient(90deg, #ffffff, rgba(255, 255, 255, 0.85));
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .hero-subtitle {
                        font-size: 1.35rem;
                        font-weight: 300;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.92);
                        margin: 0 0 0.8rem 0;
                    }

                    .hero-tagline {
                        font-size: 1.05rem;
                        color: rgba(255, 255, 255, 0.8);
                        margin: 0;
                    }

                    .mission-card {
                        margin: 2.5rem auto 0 auto;
                        padding: 1.8rem 2rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 20px;
                        backdrop-filter: blur(6px);
                    }

                    .mission-card h3 {
                        margin: 0 0 1.4rem 0;
                        font-size: 1.4rem;
                        font-weight: 600;
                    }

                    .mission-stats {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 3rem;
                    }

                    .mission-divider {
                        width: 1px;
                        height: 60px;
                        background: rgba(255, 255, 255, 0.3);
                    }

                    .stat-value {
                        font-size: 2.8rem;
                        font-weight: 700;
                        margin-bottom: 0.3rem;
                    }

                    .stat-label {
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.12em;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .mission-progress {
                        margin-top: 1.4rem;
                        height: 8px;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.2);
                        overflow: hidden;
                    }

                    .mission-progress-fill {
                        height: 100%;
                        border-radius: 999px;
                        background: #ffffff;
                    }

                    .hero-cta-group {
                        margin-top: 2.8rem;
                        display: flex;
                        justify-content: center;
                        gap: 1.4rem;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        padding: 0.9rem 2.4rem;
                        border-radius: 999px;
                        font-size: 1.1rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.2s ease, background 0.2s ease, color 0.2s ease;
                    }

                    .hero-cta:hover {
                        transform: scale(1.04);
                    }

                    .hero-cta.primary {
                        background: #ffffff;
                        color: #1f5c40;
                    }

                    .hero-cta.outline {
                        border: 2px solid #ffffff;
                        color: #ffffff;
                    }

                    .hero-cta.outline:hover {
                        background: #ffffff;
                        color: #1f5c40;
                    }

                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 1;
                        font-size: 1.4rem;
                        color: rgba(255, 255, 255, 0.85);
                        animation: bounce 1.6s infinite;
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }

                    /* Cards */
                    .card-grid {
                        display: grid;
                        gap: 2rem;
                        margin-top: 2.5rem;
                    }

                    .card-grid.three {
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    }

                    .card-grid.four {
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    }

                    .value-card,
                    .brand-card,
                    .research-card,
                    .expert-card,
                    .join-card,
                    .testimonial-card {
                        background: #ffffff;
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 6px 20px rgba(31, 58, 44, 0.08);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                        display: flex;
                        flex-direction: column;
                    }

                    .value-card:hover,
                    .brand-card:hover,
                    .research-card:hover,
                    .expert-card:hover,
                    .join-card:hover,
                    .testimonial-card:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 12px 32px rgba(31, 58, 44, 0.14);
                    }

                    .value-card img,
                    .research-card img {
                        width: 100%;
                        height: 220px;
                        object-fit: cover;
                    }

                    .value-card h4,
                    .research-card h3,
                    .join-card h3 {
                        margin: 1.2rem 1.5rem 0.5rem 1.5rem;
                        color: #1f5c40;
                        font-size: 1.2rem;
                    }

                    .value-card p,
                    .research-card p,
                    .join-card p {
                        margin: 0 1.5rem 1.5rem 1.5rem;
                        color: #5c5247;
                        font-size: 0.95rem;
                        line-height: 1.6;
                    }

                    .join-card {
                        padding-top: 0.8rem;
                    }

                    .brand-card {
                        padding-bottom: 1.5rem;
                    }

                    .brand-logo {
                        height: 160px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(38, 208, 124, 0.08);
                    }

                    .brand-logo img {
                        max-height: 110px;
                        max-width: 70%;
                        object-fit: contain;
                    }

                    .brand-card h3 {
                        margin: 1.2rem 1.5rem 0.5rem 1.5rem;
                        font-size: 1.2rem;
                        color: #1f3a2c;
                    }

                    .brand-card p {
                        margin: 0 1.5rem;
                        flex-grow: 1;
                        color: #5c5247;
                        font-size: 0.92rem;
                        line-height: 1.6;
                    }

                    .brand-more {
                        margin: 1rem 1.5rem 0 1.5rem;
                        color: #1f5c40;
                        font-weight: 600;
                        font-size: 0.92rem;
                    }

                    /* Awards */
                    .media-strip {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 1.5rem;
                        margin-top: 2.5rem;
                        overflow: hidden;
                        box-shadow: 0 6px 20px rgba(31, 58, 44, 0.08);
                    }

                    .media-strip .subsection-title {
                        margin-top: 0;
                    }

                    .media-track {
                        display: flex;
                        align-items: center;
                        gap: 2.5rem;
                        width: max-content;
                        animation: marquee 25s linear infinite;
                        will-change: transform;
                    }

                    .media-track img {
                        height: 120px;
                        border-radius: 10px;
                        object-fit: contain;
                    }

                    @keyframes marquee {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }

                    .award-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
                        gap: 2rem;
                        margin-top: 2.5rem;
                        place-items: center;
                    }

                    .award-item {
                        text-align: center;
                        max-width: 170px;
                        transition: transform 0.3s ease;
                    }

                    .award-item:hover {
                        transform: scale(1.08);
                    }

                    .award-item img {
                        width: 100%;
                        aspect-ratio: 1;
                        object-fit: contain;
                    }

                    .award-item p {
                        margin-top: 0.6rem;
                        font-size: 0.85rem;
                        color: #5c5247;
                    }

                    /* Experts */
                    .expert-card {
                        padding-bottom: 1.5rem;
                        text-align: center;
                    }

                    .expert-card img {
                        width: 100%;
                        aspect-ratio: 1;
                        object-fit: cover;
                    }

                    .expert-card h3 {
                        margin: 1.2rem 1.2rem 0.3rem 1.2rem;
                        font-size: 1.15rem;
                        color: #1f3a2c;
                    }

                    .expert-field {
                        margin: 0 1.2rem;
                        font-weight: 600;
                        color: #1f5c40;
                        font-size: 0.92rem;
                    }

                    .expert-card p:not(.expert-field) {
                        margin: 0.5rem 1.2rem 0 1.2rem;
                        color: #5c5247;
                        font-size: 0.88rem;
                        line-height: 1.5;
                    }

                    /* Testimonials & community stats */
                    .testimonial-card video {
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        object-fit: cover;
                        background: #e8e4db;
                    }

                    .testimonial-card h4 {
                        margin: 1.2rem 1.5rem 0.4rem 1.5rem;
                        font-size: 1.1rem;
                        color: #1f3a2c;
                    }

                    .testimonial-card p {
                        margin: 0 1.5rem 1.5rem 1.5rem;
                        color: #5c5247;
                        font-size: 0.92rem;
                        line-height: 1.6;
                        font-style: italic;
                    }

                    .community-stats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 2.5rem;
                        box-shadow: 0 6px 20px rgba(31, 58, 44, 0.08);
                        text-align: center;
                    }

                    .community-stat .stat-value {
                        color: #1f5c40;
                        font-size: 2.6rem;
                    }

                    .community-stat p {
                        margin: 0.4rem 0 0 0;
                        color: #5c5247;
                    }

                    /* Contact */
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 2rem;
                        margin-top: 2.5rem;
                    }

                    .contact-form-panel,
                    .contact-panel {
                        background: #ffffff;
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 6px 20px rgba(31, 58, 44, 0.08);
                    }

                    .contact-form-panel h3,
                    .contact-panel h3 {
                        margin: 0 0 1.2rem 0;
                        color: #1f3a2c;
                        font-size: 1.3rem;
                    }

                    .contact-side {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .contact-entry {
                        margin-bottom: 1rem;
                    }

                    .contact-entry h4 {
                        margin: 0 0 0.2rem 0;
                        color: #1f5c40;
                        font-size: 0.98rem;
                    }

                    .contact-entry p {
                        margin: 0;
                        color: #5c5247;
                        font-size: 0.92rem;
                    }

                    @media (max-width: 900px) {
                        .hero-content h1 {
                            font-size: 2.1rem;
                        }

                        .mission-stats {
                            flex-direction: column;
                            gap: 1.2rem;
                        }

                        .mission-divider {
                            display: none;
                        }

                        .contact-layout {
                            grid-template-columns: 1fr;
                        }

                        .page-section {
                            padding: 3.5rem 0;
                        }

                        .home-page h2 {
                            font-size: 1.9rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

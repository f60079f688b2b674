#![allow(non_upper_case_globals)]
use super::domain::TriggerVariant;
use crate::components::imports::*;

// Plain css, stylist scopes class names but keyframes have to stay global
pub const KEYFRAMES: &str = "
    @keyframes menubar-pop {
        from { transform: scale(0.8); opacity: 0; }
        to { transform: scale(1); opacity: 1; }
    }
    @keyframes menubar-enter {
        from { transform: translateY(20px) scale(0.8); opacity: 0; }
        to { transform: translateY(0) scale(1); opacity: 1; }
    }
    @keyframes menubar-exit {
        from { transform: translateY(0) scale(1); opacity: 1; }
        to { transform: translateY(20px) scale(0.8); opacity: 0; }
    }
    @keyframes menubar-pulse {
        50% { opacity: 0.5; }
    }
";

const GRADIENT: &str = "linear-gradient(to right, #4f46e5, #9333ea)";

pub fn anchor() -> StyleSource {
    css! {"
        position: fixed;
        top: 0.5rem; right: 1rem;
        z-index: 50;"
    }
}

pub fn base_btn_style() -> StyleSource {
    css! {"
        cursor: pointer;
        user-select: none;
        border: none;
        font: inherit;
        color: inherit;
        background: none;"
    }
}

pub fn trigger(variant: TriggerVariant, focus_color: &AttrValue) -> Classes {
    let surface = match variant {
        TriggerVariant::Active => css!(
            "background: ${gradient}; color: white;",
            gradient = GRADIENT
        ),
        TriggerVariant::Secondary => css! {"
            background: rgba(255, 255, 255, 0.1);
            border: 1px solid rgba(255, 255, 255, 0.2);
            backdrop-filter: blur(12px);
            color: white;"
        },
        TriggerVariant::Primary => css! {"
            background: rgba(255, 255, 255, 0.2);
            border: 1px solid rgba(255, 255, 255, 0.2);
            backdrop-filter: blur(12px);
            color: white;"
        },
    };

    classes!(
        base_btn_style(),
        css! {"
            display: flex;
            padding: 0.75rem;
            border-radius: 0.75rem;
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
            transition: all 0.3s;
            animation: menubar-pop 0.3s ease-out backwards;

            :hover {
                transform: scale(1.05);
                box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.35);
            }
            :active {
                transform: scale(0.95);
            }"
        },
        css!(
            ":focus-visible { outline: 2px solid ${focus_color}; outline-offset: 2px; }",
            focus_color = focus_color
        ),
        surface,
    )
}

pub fn icon(size: &str) -> StyleSource {
    css!(
        "width: ${size}; height: ${size}; flex-shrink: 0;",
        size = size
    )
}

// Matches the unmount delay so the exit ends as the panel is removed
pub fn exit_duration(exit_ms: u32) -> String {
    format!("{exit_ms}ms")
}

pub fn panel(exiting: bool, exit_ms: u32) -> Classes {
    let motion = if exiting {
        css!(
            "
                animation: menubar-exit ${duration} ease-in both;
                pointer-events: none;
            ",
            duration = exit_duration(exit_ms)
        )
    } else {
        css! {"animation: menubar-enter 0.2s ease-out both;"}
    };

    classes!(
        css! {"
            position: absolute;
            top: 4rem; right: 0;
            width: 18rem;
            padding: 0.5rem;
            border-radius: 1rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(0, 0, 0, 0.3);
            backdrop-filter: blur(24px);
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
            color: white;
            transform-origin: top right;

            display: flex;
            flex-direction: column;
            gap: 0.5rem;"
        },
        motion,
    )
}

pub fn heading() -> StyleSource {
    css! {"
        margin: 0;
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        font-weight: 500;"
    }
}

pub fn grid() -> StyleSource {
    css! {"
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 0.5rem;
        padding: 0 1rem;"
    }
}

pub fn entry(selected: bool) -> Classes {
    let state = if selected {
        css!(
            "
                background: ${gradient};
                color: white;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
            ",
            gradient = GRADIENT
        )
    } else {
        css! {"
            color: rgba(255, 255, 255, 0.8);
            :hover {
                background: rgba(255, 255, 255, 0.1);
                color: white;
            }"
        }
    };

    classes!(
        base_btn_style(),
        css! {"
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 0.5rem;
            padding: 0.75rem;
            border-radius: 0.75rem;
            font-size: 0.75rem;
            transition: all 0.15s;"
        },
        state,
    )
}

pub fn divider() -> StyleSource {
    css! {"
        margin: 0.5rem 0;
        border: none;
        border-top: 1px solid rgba(255, 255, 255, 0.1);"
    }
}

pub fn support_link() -> StyleSource {
    css! {"
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin: 0 0.5rem;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        color: white;
        text-decoration: none;
        transition: all 0.15s;

        :hover {
            background: rgba(255, 255, 255, 0.1);
        }
        :hover .support-badge {
            transform: scale(1.1);
        }"
    }
}

pub fn support_badge() -> StyleSource {
    css! {"
        display: flex;
        padding: 0.5rem;
        border-radius: 0.5rem;
        background: linear-gradient(to right, #f59e0b, #f97316);
        color: white;
        transition: transform 0.15s;"
    }
}

pub fn support_text() -> StyleSource {
    css! {"
        flex: 1;

        p { margin: 0; }
        .support-title { font-weight: 500; }
        .support-caption {
            font-size: 0.75rem;
            color: rgba(255, 255, 255, 0.7);
        }"
    }
}

pub fn credit() -> StyleSource {
    css! {"
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.25rem;
        margin: 0;
        padding: 0.75rem 1rem;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.6);"
    }
}

pub fn heart() -> StyleSource {
    css! {"
        color: #ef4444;
        animation: menubar-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;"
    }
}

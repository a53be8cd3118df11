// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

// Field values are drawn as literal text -- the renderer has no markup to
// inject into. What can still break a terminal grid is an embedded control
// character, so those become visible placeholders before display.
pub fn sanitize_for_display(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            '\t' => ' ',
            ch if ch.is_control() => '▯',
            ch => ch,
        })
        .collect()
}

/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

/// Writes formatted output followed by a newline to a pinned
/// tokio::io::AsyncWrite and flushes it, like writeln! for async writers.
#[macro_export]
macro_rules! async_writeln {
    ($writer:expr) => {
        $crate::async_write::write_flush(&mut $writer, "\n").await
    };
    ($writer:expr, $($arg:tt)+) => {{
        let mut formatted = format!($($arg)+);
        formatted.push('\n');
        $crate::async_write::write_flush(&mut $writer, &formatted).await
    }};
}

pub async fn write_flush<W>(writer: &mut W, text: &str) -> std::io::Result<()>
where
    W: tokio::io::AsyncWrite + Unpin + ?Sized,
{
    use tokio::io::AsyncWriteExt;

    writer.write_all(text.as_bytes()).await?;
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;

    #[tokio::test]
    async fn writeln_appends_newline() {
        let mut out: Pin<Box<Vec<u8>>> = Box::pin(Vec::new());
        async_writeln!(out, "Success!").expect("write to vec");
        async_writeln!(out).expect("write to vec");
        assert_eq!(out.as_slice(), b"Success!\n\n");
    }
}

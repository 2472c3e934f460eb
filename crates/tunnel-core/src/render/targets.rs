use super::helpers;
use crate::constants::DEPTH_FORMAT;

/// Size-dependent attachments for the tunnel pass.
///
/// - `depth` is the depth buffer, sampled at `sample_count`.
/// - `msaa` is the multisampled color target resolved into the swapchain
///   image; absent when `sample_count == 1`.
pub(crate) struct RenderTargets {
    pub(crate) depth: (wgpu::Texture, wgpu::TextureView),
    pub(crate) msaa: Option<(wgpu::Texture, wgpu::TextureView)>,
    pub(crate) color_format: wgpu::TextureFormat,
    pub(crate) sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            depth: Self::depth_attachment(device, sample_count, width, height),
            msaa: Self::msaa_attachment(device, color_format, sample_count, width, height),
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = Self::depth_attachment(device, self.sample_count, width, height);
        self.msaa =
            Self::msaa_attachment(device, self.color_format, self.sample_count, width, height);
    }

    pub(crate) fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.1
    }

    pub(crate) fn msaa_view(&self) -> Option<&wgpu::TextureView> {
        self.msaa.as_ref().map(|(_, view)| view)
    }

    fn depth_attachment(
        device: &wgpu::Device,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_attachment(
            device,
            "depth_tex",
            width,
            height,
            DEPTH_FORMAT,
            sample_count,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        )
    }

    fn msaa_attachment(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        width: u32,
        height: u32,
    ) -> Option<(wgpu::Texture, wgpu::TextureView)> {
        (sample_count > 1).then(|| {
            helpers::create_attachment(
                device,
                "msaa_color",
                width,
                height,
                color_format,
                sample_count,
                wgpu::TextureUsages::RENDER_ATTACHMENT,
            )
        })
    }
}

use serde_json::{json, Map, Value};

/// Base sync settings for the Mupen64Plus core: the plugin selection and the
/// per-plugin option blocks BizHawk expects to find in every movie. Key order
/// is part of the serialized format.
pub(super) fn sync_settings() -> Map<String, Value> {
    let Value::Object(map) = json!({
        "Core": 1,
        "Rsp": 0,
        "VideoPlugin": 4,
        "DisableExpansionSlot": true,
        "RicePlugin": {
            "FrameBufferSetting": 0,
            "FrameBufferWriteBackControl": 0,
            "RenderToTexture": 0,
            "ScreenUpdateSetting": 4,
            "Mipmapping": 2,
            "FogMethod": 0,
            "ForceTextureFilter": 0,
            "TextureEnhancement": 0,
            "TextureEnhancementControl": 0,
            "TextureQuality": 0,
            "OpenGLDepthBufferSetting": 16,
            "MultiSampling": 0,
            "ColorQuality": 0,
            "OpenGLRenderSetting": 0,
            "AnisotropicFiltering": 0,
            "NormalAlphaBlender": false,
            "FastTextureLoading": false,
            "AccurateTextureMapping": true,
            "InN64Resolution": false,
            "SaveVRAM": false,
            "DoubleSizeForSmallTxtrBuf": false,
            "DefaultCombinerDisable": false,
            "EnableHacks": true,
            "WinFrameMode": false,
            "FullTMEMEmulation": false,
            "OpenGLVertexClipper": false,
            "EnableSSE": true,
            "EnableVertexShader": false,
            "SkipFrame": false,
            "TexRectOnly": false,
            "SmallTextureOnly": false,
            "LoadHiResCRCOnly": true,
            "LoadHiResTextures": false,
            "DumpTexturesToFiles": false,
            "UseDefaultHacks": true,
            "DisableTextureCRC": false,
            "DisableCulling": false,
            "IncTexRectEdge": false,
            "ZHack": false,
            "TextureScaleHack": false,
            "PrimaryDepthHack": false,
            "Texture1Hack": false,
            "FastLoadTile": false,
            "UseSmallerTexture": false,
            "VIWidth": -1,
            "VIHeight": -1,
            "UseCIWidthAndRatio": 0,
            "FullTMEM": 0,
            "TxtSizeMethod2": false,
            "EnableTxtLOD": false,
            "FastTextureCRC": 0,
            "EmulateClear": false,
            "ForceScreenClear": false,
            "AccurateTextureMappingHack": 0,
            "NormalBlender": 0,
            "DisableBlender": false,
            "ForceDepthBuffer": false,
            "DisableObjBG": false,
            "FrameBufferOption": 0,
            "RenderToTextureOption": 0,
            "ScreenUpdateSettingHack": 0,
            "EnableHacksForGame": 0
        },
        "GlidePlugin": {
            "wfmode": 1,
            "wireframe": false,
            "card_id": 0,
            "flame_corona": false,
            "ucode": 2,
            "autodetect_ucode": true,
            "motionblur": false,
            "fb_read_always": false,
            "unk_as_red": false,
            "filter_cache": false,
            "fast_crc": false,
            "disable_auxbuf": false,
            "fbo": false,
            "noglsl": true,
            "noditheredalpha": true,
            "tex_filter": 0,
            "fb_render": false,
            "wrap_big_tex": false,
            "use_sts1_only": false,
            "soft_depth_compare": false,
            "PPL": false,
            "fb_optimize_write": false,
            "fb_optimize_texrect": true,
            "increase_texrect_edge": false,
            "increase_primdepth": false,
            "fb_ignore_previous": false,
            "fb_ignore_aux_copy": false,
            "fb_hires_buf_clear": true,
            "force_microcheck": false,
            "force_depth_compare": false,
            "fog": true,
            "fillcolor_fix": false,
            "fb_smart": false,
            "fb_read_alpha": false,
            "fb_get_info": false,
            "fb_hires": true,
            "fb_clear": false,
            "detect_cpu_write": false,
            "decrease_fillrect_edge": false,
            "buff_clear": true,
            "alt_tex_size": false,
            "UseDefaultHacks": true,
            "enable_hacks_for_game": 0,
            "swapmode": 1,
            "stipple_pattern": 1041204192,
            "stipple_mode": 2,
            "scale_y": 100000,
            "scale_x": 100000,
            "offset_y": 0,
            "offset_x": 0,
            "lodmode": 0,
            "fix_tex_coord": 0,
            "filtering": 1,
            "depth_bias": 20
        },
        "Glide64mk2Plugin": {
            "wrpFBO": true,
            "card_id": 0,
            "use_sts1_only": false,
            "optimize_texrect": true,
            "increase_texrect_edge": false,
            "ignore_aux_copy": false,
            "hires_buf_clear": true,
            "force_microcheck": false,
            "fog": true,
            "fb_smart": false,
            "fb_read_alpha": false,
            "fb_hires": true,
            "detect_cpu_write": false,
            "decrease_fillrect_edge": false,
            "buff_clear": true,
            "alt_tex_size": false,
            "swapmode": 1,
            "stipple_pattern": 1041204192,
            "stipple_mode": 2,
            "lodmode": 0,
            "filtering": 0,
            "wrpAnisotropic": false,
            "correct_viewport": false,
            "force_calc_sphere": false,
            "pal230": false,
            "texture_correction": true,
            "n64_z_scale": false,
            "old_style_adither": false,
            "zmode_compare_less": false,
            "adjust_aspect": true,
            "clip_zmax": true,
            "clip_zmin": false,
            "force_quad3d": false,
            "useless_is_useless": false,
            "fb_read_always": false,
            "fb_get_info": false,
            "fb_render": true,
            "aspectmode": 0,
            "fb_crc_mode": 1,
            "fast_crc": true,
            "UseDefaultHacks": true,
            "enable_hacks_for_game": 0,
            "read_back_to_screen": 0
        },
        "GLideN64Plugin": {
            "BackgroundsMode": 1,
            "UseDefaultHacks": true,
            "MultiSampling": 0,
            "AspectRatio": 1,
            "BufferSwapMode": 0,
            "UseNativeResolutionFactor": 0,
            "bilinearMode": 0,
            "enableHalosRemoval": false,
            "MaxAnisotropy": false,
            "CacheSize": 8000,
            "ShowInternalResolution": false,
            "ShowRenderingResolution": false,
            "FXAA": false,
            "EnableNoise": true,
            "EnableLOD": true,
            "EnableHWLighting": false,
            "EnableShadersStorage": true,
            "CorrectTexrectCoords": 0,
            "EnableNativeResTexrects": false,
            "EnableLegacyBlending": false,
            "EnableFragmentDepthWrite": true,
            "EnableFBEmulation": true,
            "EnableCopyAuxiliaryToRDRAM": false,
            "EnableN64DepthCompare": true,
            "EnableOverscan": false,
            "OverscanNtscTop": 0,
            "OverscanNtscBottom": 0,
            "OverscanNtscLeft": 0,
            "OverscanNtscRight": 0,
            "OverscanPalTop": 0,
            "OverscanPalBottom": 0,
            "OverscanPalLeft": 0,
            "OverscanPalRight": 0,
            "DisableFBInfo": true,
            "FBInfoReadColorChunk": false,
            "FBInfoReadDepthChunk": true,
            "EnableCopyColorToRDRAM": 1,
            "EnableCopyDepthToRDRAM": 2,
            "EnableCopyColorFromRDRAM": false,
            "txFilterMode": 0,
            "txEnhancementMode": 0,
            "txDeposterize": false,
            "txFilterIgnoreBG": false,
            "txCacheSize": 100,
            "txHiresEnable": false,
            "txHiresFullAlphaChannel": false,
            "txEnhancedTextureFileStorage": false,
            "txHiresTextureFileStorage": false,
            "txHresAltCRC": false,
            "txDump": false,
            "txCacheCompression": true,
            "txForce16bpp": false,
            "txSaveCache": true,
            "txPath": "",
            "EnableBloom": false,
            "bloomThresholdLevel": 4,
            "bloomBlendMode": 0,
            "blurAmount": 10,
            "blurStrength": 20,
            "ForceGammaCorrection": false,
            "GammaCorrectionLevel": 2.0
        }
    }) else {
        unreachable!()
    };
    map
}
